use colored::Colorize;

fn main() {
    if let Err(e) = syslog_filter::run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}
