//! `linecut` binary: delete a range of lines from a file and report the result

use linecut_cli::{logging, render, run, Invocation};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let invocation = Invocation::from_env();
    logging::init(invocation.verbosity);

    let report = run(&invocation).await?;
    println!("{}", render(&report, invocation.format)?);

    Ok(())
}
