use super::*;

#[test]
fn parses_scrape_with_defaults() {
    let cli = Cli::try_parse_from(["dealscout-cli", "scrape", "https://www.ebay.com/sch?_nkw=lamp"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Scrape {
            ref input,
            no_browser: false,
            pretty: false,
        } if input == "https://www.ebay.com/sch?_nkw=lamp"
    ));
}

#[test]
fn parses_scrape_flags() {
    let cli = Cli::try_parse_from([
        "dealscout-cli",
        "scrape",
        "--no-browser",
        "--pretty",
        "https://www.walmart.com/search?q=tv",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Scrape {
            no_browser: true,
            pretty: true,
            ..
        }
    ));
}

#[test]
fn parses_stdin_marker_as_input() {
    let cli = Cli::try_parse_from(["dealscout-cli", "scrape", "-"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Scrape { ref input, .. } if input == "-"));
}

#[test]
fn parses_tool_info_command() {
    let cli = Cli::try_parse_from(["dealscout-cli", "tool-info"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::ToolInfo));
}

#[test]
fn scrape_requires_input() {
    assert!(Cli::try_parse_from(["dealscout-cli", "scrape"]).is_err());
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["dealscout-cli"]).is_err());
}

#[test]
fn read_input_passes_urls_through() {
    let input = read_input("https://bestbuy.com".to_owned(), std::io::empty()).unwrap();
    assert_eq!(input, "https://bestbuy.com");
}

#[test]
fn read_input_reads_stdin_for_dash() {
    let stdin = std::io::Cursor::new("  'https://www.amazon.com/s?k=mouse'\n");
    let input = read_input("-".to_owned(), stdin).unwrap();
    assert_eq!(input, "  'https://www.amazon.com/s?k=mouse'\n");
}

#[tokio::test]
async fn compact_output_is_the_scraper_text_contract() {
    let config = dealscout_core::AppConfig {
        browser_enabled: false,
        ..dealscout_core::AppConfig::default()
    };
    let scraper = ProductScraper::from_config(&config).unwrap();

    let output = scraper.scrape_to_string("ftp://example.com").await;
    assert_eq!(
        output,
        r#"{"error":"Invalid URL format. URL must start with http:// or https://"}"#
    );
}
