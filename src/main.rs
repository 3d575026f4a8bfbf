// xfilter - tweet filtering relay

use xfilter::cli;

#[tokio::main]
async fn main() -> miette::Result<()> {
    cli::run().await
}
