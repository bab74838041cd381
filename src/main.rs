mod cli;
mod exits;
mod pass;
mod rand;
mod settings;
mod terminal;
mod tui;

fn main() {
    exits::install();

    let args: Vec<String> = std::env::args().collect();
    // A bare `roundpass` runs the saved command when there is one.
    if args.len() > 1 || settings::Settings::has_saved_command() {
        cli::run(args);
    } else {
        tui::run();
    }
}
