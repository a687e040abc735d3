use std::process::exit;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let code = quinte_cli::run(args, &mut std::io::stdout(), &mut std::io::stderr());
    exit(code);
}
