use crate::config::GitDashConfig;
use crate::fetch::{GitHubClient, SearchBackend};
use crate::filters::FilterState;
use crate::format::{format_count, format_relative};
use crate::pagination::total_pages;

/// One-shot search: prints a single page of results for the given filters.
pub fn search_repos(filters: &FilterState) {
    let config = GitDashConfig::load();
    let client = match GitHubClient::new(config.token) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    match client.search(filters) {
        Ok(result) => {
            if result.items.is_empty() {
                println!("No repositories found.");
                return;
            }
            println!(
                "\nFound {} repositories (page {} of {}):\n",
                format_count(result.total_count),
                filters.page,
                total_pages(result.total_count, filters.per_page).max(1)
            );
            for repo in &result.items {
                println!("  {}", repo.full_name);
                println!(
                    "    ⭐ {}   🍴 {}   updated {}",
                    format_count(repo.stargazers_count),
                    format_count(repo.forks_count),
                    format_relative(&repo.updated_at)
                );
                if let Some(desc) = &repo.description {
                    println!("    {}", desc);
                }
                println!("    {}\n", repo.html_url);
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
