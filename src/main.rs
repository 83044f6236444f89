mod cli;

#[tokio::main]
async fn main() {
    match cli::run() {
        cli::RunOutcome::Serve(config, addr) => {
            println!("listening on http://{addr}");
            shagaf_admin::serve(addr, config).await;
        }
        cli::RunOutcome::Exit(code) => std::process::exit(code),
    }
}
