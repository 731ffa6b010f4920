use colored::Colorize;

fn main() {
    if let Err(e) = tfx::run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
