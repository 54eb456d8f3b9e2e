use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::config::GitDashConfig;
use crate::debounce::{Debouncer, DEFAULT_DEBOUNCE};
use crate::fetch::{FetchOutcome, FetchState, GitHubClient, Orchestrator, SearchBackend};
use crate::filters::{FilterState, Order, SortBy, ANY, LANGUAGES, LICENSES};
use crate::format::{format_count, format_relative};
use crate::pagination::{compute_window, result_bounds, total_pages, PageItem};

/// Everything the dashboard loop reacts to: raw input lines, debounced
/// query edits, and finished search requests. One channel, one consumer,
/// so all state mutation stays on this thread.
enum Event {
    Line(String),
    Query(String),
    Fetch(FetchOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Bare text: a query edit, routed through the debouncer.
    Search(String),
    Lang(String),
    License(String),
    StarsMin(String),
    StarsMax(String),
    Sort(SortBy),
    OrderBy(Order),
    Page(u32),
    Next,
    Prev,
    Reset,
    Retry,
    Languages,
    Licenses,
    Help,
    Quit,
    Nothing,
    Invalid(String),
}

fn parse_line(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Nothing;
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    match (word, rest) {
        ("quit", _) | ("exit", _) => Command::Quit,
        ("help", _) => Command::Help,
        ("languages", _) => Command::Languages,
        ("licenses", _) => Command::Licenses,
        ("reset", _) => Command::Reset,
        ("retry", _) => Command::Retry,
        ("next", _) => Command::Next,
        ("prev", _) => Command::Prev,
        ("lang", "") => Command::Invalid("usage: lang <language|any>".into()),
        ("lang", value) => Command::Lang(value.to_string()),
        ("license", "") => Command::Invalid("usage: license <license|any>".into()),
        ("license", value) => Command::License(value.to_string()),
        ("min", value) | ("max", value) => parse_stars(word, value),
        ("sort", value) => match SortBy::parse(value) {
            Some(sort) => Command::Sort(sort),
            None => Command::Invalid("usage: sort <stars|forks|updated>".into()),
        },
        ("order", value) => match Order::parse(value) {
            Some(order) => Command::OrderBy(order),
            None => Command::Invalid("usage: order <asc|desc>".into()),
        },
        ("page", value) => match value.parse::<u32>() {
            Ok(page) if page >= 1 => Command::Page(page),
            _ => Command::Invalid("usage: page <number>".into()),
        },
        // Anything else is free-text search input.
        _ => Command::Search(line.to_string()),
    }
}

/// `min 100` / `max 5000`; `-` clears the bound. Digits only, validated
/// here at the input boundary rather than inside the filter state.
fn parse_stars(which: &str, value: &str) -> Command {
    let cleared = value == "-" || value.is_empty();
    if !cleared && !value.chars().all(|c| c.is_ascii_digit()) {
        return Command::Invalid(format!("usage: {} <digits|->", which));
    }
    let bound = if cleared { String::new() } else { value.to_string() };
    if which == "min" {
        Command::StarsMin(bound)
    } else {
        Command::StarsMax(bound)
    }
}

pub fn run() {
    let config = GitDashConfig::load();
    let client = match GitHubClient::new(config.token.clone()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let (tx, rx) = mpsc::channel::<Event>();

    let fetch_tx = tx.clone();
    let mut orchestrator = Orchestrator::new(client, move |outcome| {
        let _ = fetch_tx.send(Event::Fetch(outcome));
    });

    let delay = config
        .debounce_ms
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_DEBOUNCE);
    let query_tx = tx.clone();
    let debouncer = Debouncer::new(delay, move |value| {
        let _ = query_tx.send(Event::Query(value));
    });

    let line_tx = tx;
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(Event::Line(line)).is_err() {
                return;
            }
        }
        // EOF behaves like quit.
        let _ = line_tx.send(Event::Line("quit".to_string()));
    });

    let mut filters = FilterState::default();
    if let Some(per_page) = config.per_page {
        filters.per_page = per_page.clamp(1, 100);
    }

    println!("GitHub Explorer");
    println!("Type a search term, 'help' for commands, 'quit' to leave.\n");
    start_search(&filters, &mut orchestrator);

    while let Ok(event) = rx.recv() {
        match event {
            Event::Line(line) => {
                if !handle_command(parse_line(&line), &mut filters, &mut orchestrator, &debouncer)
                {
                    break;
                }
            }
            Event::Query(query) => {
                filters.set_query(query);
                start_search(&filters, &mut orchestrator);
            }
            Event::Fetch(outcome) => {
                if orchestrator.commit(outcome) {
                    render(&filters, &orchestrator.state);
                }
            }
        }
    }
}

/// Applies one parsed command. Returns false when the loop should exit.
fn handle_command<B: SearchBackend>(
    command: Command,
    filters: &mut FilterState,
    orchestrator: &mut Orchestrator<B>,
    debouncer: &Debouncer,
) -> bool {
    let mut refetch = false;
    match command {
        Command::Quit => {
            debouncer.cancel();
            println!("Bye.");
            return false;
        }
        Command::Nothing => {}
        Command::Invalid(message) => println!("{}", message),
        Command::Help => print_help(),
        Command::Languages => print_options("Languages", LANGUAGES),
        Command::Licenses => print_options("Licenses", LICENSES),
        Command::Search(text) => {
            // Echoed immediately, propagated only after the quiet window.
            println!("query: {}", text);
            debouncer.call(text);
        }
        Command::Lang(value) => {
            filters.set_language(normalize_any(value));
            refetch = true;
        }
        Command::License(value) => {
            filters.set_license(normalize_any(value));
            refetch = true;
        }
        Command::StarsMin(bound) => {
            filters.set_stars_min(bound);
            refetch = true;
        }
        Command::StarsMax(bound) => {
            filters.set_stars_max(bound);
            refetch = true;
        }
        Command::Sort(sort) => {
            filters.set_sort_by(sort);
            refetch = true;
        }
        Command::OrderBy(order) => {
            filters.set_order(order);
            refetch = true;
        }
        Command::Page(page) => {
            let last = total_pages(orchestrator.state.total_count, filters.per_page);
            if page > last.max(1) {
                println!("No page {} (only {} pages).", page, last.max(1));
            } else {
                filters.set_page(page);
                refetch = true;
            }
        }
        Command::Next => {
            let last = total_pages(orchestrator.state.total_count, filters.per_page);
            if filters.page >= last {
                println!("Already on the last page.");
            } else {
                filters.set_page(filters.page + 1);
                refetch = true;
            }
        }
        Command::Prev => {
            if filters.page <= 1 {
                println!("Already on the first page.");
            } else {
                filters.set_page(filters.page - 1);
                refetch = true;
            }
        }
        Command::Reset => {
            filters.reset();
            refetch = true;
        }
        Command::Retry => refetch = true,
    }
    if refetch {
        start_search(filters, orchestrator);
    }
    true
}

fn start_search<B: SearchBackend>(filters: &FilterState, orchestrator: &mut Orchestrator<B>) {
    orchestrator.dispatch(filters);
    if orchestrator.state.is_initial_load() {
        println!("Searching GitHub...");
    } else {
        // The previous page stays on screen until the new one lands.
        println!("Loading page {}...", filters.page);
    }
}

fn normalize_any(value: String) -> String {
    if value.eq_ignore_ascii_case(ANY) {
        ANY.to_string()
    } else {
        value
    }
}

fn render(filters: &FilterState, state: &FetchState) {
    println!("\n{}", "=".repeat(60));
    if let Some(error) = &state.error {
        println!("Error: {}", error);
        println!("Type 'retry' to try again, or adjust your filters.");
        if state.items.is_empty() {
            println!("{}", "=".repeat(60));
            return;
        }
        println!("Showing the last successful results:\n");
    } else {
        println!(
            "{} repositories for \"{}\"\n",
            format_count(state.total_count),
            filters.query
        );
    }

    if state.items.is_empty() {
        println!("No repositories found.");
        println!("{}", "=".repeat(60));
        return;
    }

    for repo in &state.items {
        println!("  {}", repo.full_name);
        print!(
            "    ⭐ {}   🍴 {}",
            format_count(repo.stargazers_count),
            format_count(repo.forks_count)
        );
        if let Some(language) = &repo.language {
            print!("   {}", language);
        }
        if let Some(license) = &repo.license {
            print!("   {}", license.name);
        }
        println!("   updated {}", format_relative(&repo.updated_at));
        if let Some(description) = &repo.description {
            println!("    {}", description);
        }
        println!("    {}\n", repo.html_url);
    }

    let window = compute_window(filters.page, state.total_count, filters.per_page, 5);
    if !window.is_empty() {
        let row: Vec<String> = window
            .iter()
            .map(|item| match item {
                PageItem::Page(page) if *page == filters.page => format!("[{}]", page),
                PageItem::Page(page) => page.to_string(),
                PageItem::Ellipsis => "...".to_string(),
            })
            .collect();
        println!("  Pages: {}", row.join(" "));
        let (first, last) = result_bounds(filters.page, filters.per_page, state.total_count);
        println!(
            "  Showing {} to {} of {} results",
            first, last, state.total_count
        );
    }
    println!("{}", "=".repeat(60));
}

fn print_help() {
    println!("Commands:");
    println!("  <text>              search for <text> (debounced)");
    println!("  lang <value|any>    filter by primary language");
    println!("  license <value|any> filter by license identifier");
    println!("  min <digits|->      minimum stars ('-' clears)");
    println!("  max <digits|->      maximum stars ('-' clears)");
    println!("  sort <stars|forks|updated>");
    println!("  order <asc|desc>");
    println!("  page <n> / next / prev");
    println!("  reset               defaults (keeps the query)");
    println!("  retry               re-run the current search");
    println!("  languages, licenses, help, quit");
}

fn print_options(label: &str, options: &[&str]) {
    println!("{}:", label);
    for option in options {
        println!("  {}", option);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_text_is_a_search() {
        assert_eq!(
            parse_line("game of life"),
            Command::Search("game of life".to_string())
        );
    }

    #[test]
    fn test_empty_line_is_a_noop() {
        assert_eq!(parse_line("   "), Command::Nothing);
    }

    #[test]
    fn test_keyword_commands() {
        assert_eq!(parse_line("lang Rust"), Command::Lang("Rust".to_string()));
        assert_eq!(
            parse_line("license mit"),
            Command::License("mit".to_string())
        );
        assert_eq!(parse_line("sort updated"), Command::Sort(SortBy::Updated));
        assert_eq!(parse_line("order asc"), Command::OrderBy(Order::Asc));
        assert_eq!(parse_line("page 3"), Command::Page(3));
        assert_eq!(parse_line("next"), Command::Next);
        assert_eq!(parse_line("prev"), Command::Prev);
        assert_eq!(parse_line("reset"), Command::Reset);
        assert_eq!(parse_line("retry"), Command::Retry);
        assert_eq!(parse_line("quit"), Command::Quit);
    }

    #[test]
    fn test_stars_bounds_are_digits_only() {
        assert_eq!(parse_line("min 100"), Command::StarsMin("100".to_string()));
        assert_eq!(parse_line("max 5000"), Command::StarsMax("5000".to_string()));
        assert_eq!(parse_line("min -"), Command::StarsMin(String::new()));
        assert!(matches!(parse_line("min lots"), Command::Invalid(_)));
        assert!(matches!(parse_line("max 1e3"), Command::Invalid(_)));
    }

    #[test]
    fn test_bad_arguments_are_invalid() {
        assert!(matches!(parse_line("sort size"), Command::Invalid(_)));
        assert!(matches!(parse_line("order sideways"), Command::Invalid(_)));
        assert!(matches!(parse_line("page zero"), Command::Invalid(_)));
        assert!(matches!(parse_line("page 0"), Command::Invalid(_)));
        assert!(matches!(parse_line("lang"), Command::Invalid(_)));
    }

    #[test]
    fn test_any_is_case_insensitive() {
        assert_eq!(normalize_any("Any".to_string()), "any");
        assert_eq!(normalize_any("Rust".to_string()), "Rust");
    }
}
