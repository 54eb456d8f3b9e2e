use serde::Deserialize;

/// A repository as returned by the GitHub search API.
///
/// Read-only projection of the remote record; it flows straight from the
/// response body to the renderer and is never mutated or persisted.
#[derive(Deserialize, Debug, Clone)]
pub struct Repository {
    #[allow(dead_code)]
    pub id: u64,
    #[allow(dead_code)]
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub language: Option<String>,
    pub license: Option<RepoLicense>,
    pub updated_at: String,
    #[allow(dead_code)]
    pub owner: RepoOwner,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RepoOwner {
    #[allow(dead_code)]
    pub login: String,
    #[allow(dead_code)]
    pub avatar_url: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RepoLicense {
    pub name: String,
}

/// Body of a successful `GET /search/repositories` response.
#[derive(Deserialize, Debug, Clone)]
pub struct SearchResponse {
    pub total_count: u64,
    pub items: Vec<Repository>,
}
