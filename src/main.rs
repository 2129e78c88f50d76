fn main() -> miette::Result<()> {
    cssel::cli::run()
}
