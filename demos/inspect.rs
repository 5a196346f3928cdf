fn main() {
    let args: Vec<String> = std::env::args().collect();
    let text = if args.len() > 1 {
        std::fs::read_to_string(&args[1]).expect("Failed to read file")
    } else {
        "# Overview\n\nSee [the docs](https://example.com) for *details*.".to_string()
    };

    // Load config from current directory
    let config = notemark::Config::load(std::path::Path::new("notemark.toml"));
    println!("{}", notemark::render_to_document(&text, &config));
}
