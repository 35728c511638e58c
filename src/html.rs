use chrono::{DateTime, SecondsFormat, Utc};

use crate::badges;
use crate::github::Repository;
use crate::owner::Owner;
use crate::portfolio::Portfolio;
use crate::stats::ProfileStats;

const STYLE: &str = r#"
body      { margin: 0; background: #f9fafb; color: #111827;
            font-family: system-ui, -apple-system, "Segoe UI", sans-serif; }
nav       { position: fixed; top: 0; width: 100%; height: 4rem; z-index: 50;
            display: flex; align-items: center; justify-content: space-between;
            padding: 0 1rem; box-sizing: border-box;
            background: rgba(255,255,255,0.8); border-bottom: 1px solid #e5e7eb; }
main      { max-width: 64rem; margin: 0 auto; padding: 5rem 1rem 0; }
.card     { background: #fff; border: 1px solid #e5e7eb; border-radius: 0.75rem;
            box-shadow: 0 10px 15px -3px rgba(0,0,0,0.1); padding: 2rem; margin-bottom: 2rem; }
.pill     { display: inline-block; padding: 0.5rem 1rem; border-radius: 9999px;
            text-decoration: none; margin-right: 0.75rem; }
.avatar   { width: 8rem; height: 8rem; border-radius: 9999px; border: 4px solid #e0e7ff; }
.grid     { display: grid; gap: 1.5rem; }
.grid-2   { grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr)); }
.grid-4   { grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr)); }
.grid-5   { grid-template-columns: repeat(auto-fit, minmax(4rem, 1fr)); }
.stat     { margin-bottom: 0; }
.label    { font-size: 0.875rem; color: #4b5563; }
.value    { font-size: 1.5rem; font-weight: 700; }
.wide     { width: 100%; }
.icon     { width: 4rem; height: 4rem; }
footer    { border-top: 1px solid #e5e7eb; background: #fff; margin-top: 3rem;
            padding: 2rem 1rem; text-align: center; color: #4b5563; }
footer a  { margin: 0 1rem; color: #4b5563; }
"#;

/// Escape text for use in element content and quoted attributes.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn navbar(owner: &Owner) -> String {
    format!(
        r#"<nav>
  <span class="brand">{name}</span>
  <a class="pill" href="{github}">GitHub</a>
</nav>
"#,
        name = escape_html(owner.display_name),
        github = escape_html(&owner.github_url()),
    )
}

fn profile_header(owner: &Owner, stats: &ProfileStats) -> String {
    format!(
        r#"<section id="about" class="card">
  <img class="avatar" src="{avatar}" alt="Profile">
  <h1>{name}</h1>
  <p>{tagline}</p>
  <p class="live-counts"><span id="header-followers">{followers}</span> followers &middot; <span id="header-repos">{repos}</span> repositories</p>
  <a class="pill" href="{linkedin}">LinkedIn</a>
  <a class="pill" href="{portfolio}">Portfolio</a>
  <a class="pill" href="{mailto}">Email</a>
</section>
"#,
        avatar = escape_html(&owner.avatar_url()),
        name = escape_html(owner.display_name),
        tagline = escape_html(owner.tagline),
        followers = stats.followers,
        repos = stats.repos,
        linkedin = escape_html(owner.linkedin_url),
        portfolio = escape_html(owner.portfolio_url),
        mailto = escape_html(&owner.mailto()),
    )
}

fn stat_cell(id: &str, label: &str, value: u64) -> String {
    format!(
        r#"  <div id="stat-{id}" class="card stat"><div class="label">{label}</div><div class="value">{value}</div></div>
"#
    )
}

fn quick_stats(stats: &ProfileStats) -> String {
    let mut out = String::from("<section id=\"quick-stats\" class=\"grid grid-4\">\n");
    out.push_str(&stat_cell("followers", "Followers", stats.followers));
    out.push_str(&stat_cell("stars", "Total Stars", stats.stars));
    out.push_str(&stat_cell("forks", "Forks", stats.forks));
    out.push_str(&stat_cell("repos", "Repositories", stats.repos));
    out.push_str("</section>\n");
    out
}

fn image_card(id: &str, title: &str, src: &str, alt: &str) -> String {
    format!(
        r#"<section id="{id}" class="card">
  <h2>{title}</h2>
  <img class="wide" src="{src}" alt="{alt}">
</section>
"#,
        src = escape_html(src),
    )
}

fn badge_cards(owner: &Owner) -> String {
    format!(
        "<div id=\"stats\" class=\"grid grid-2\">\n{}{}</div>\n",
        image_card(
            "stats-card",
            "GitHub Stats",
            &badges::stats_card(owner.username),
            "GitHub Stats"
        ),
        image_card(
            "streak-card",
            "Contribution Streak",
            &badges::streak_card(owner.username),
            "GitHub Streak"
        ),
    )
}

fn tech_stack() -> String {
    let mut out = String::from(
        "<section id=\"tech\" class=\"card\">\n  <h2>Tech Stack</h2>\n  <div class=\"grid grid-5\">\n",
    );
    for icon in &badges::TECH_STACK {
        out.push_str(&format!(
            "    <img class=\"icon\" src=\"{}\" alt=\"{}\">\n",
            escape_html(&badges::tech_icon(icon)),
            escape_html(icon.label)
        ));
    }
    out.push_str("  </div>\n</section>\n");
    out
}

fn project_entry(owner: &Owner, repo: &Repository) -> String {
    format!(
        r#"    <a class="project" data-repo-id="{id}" href="{href}" target="_blank" rel="noopener noreferrer"><img class="wide" src="{src}" alt="{name}"></a>
"#,
        id = repo.id,
        href = escape_html(&repo.html_url),
        src = escape_html(&badges::pin_card(owner.username, &repo.name)),
        name = escape_html(&repo.name),
    )
}

fn projects(owner: &Owner, repos: &[Repository]) -> String {
    let mut out = String::from(
        "<section id=\"projects\" class=\"card\">\n  <h2>All Projects</h2>\n  <div class=\"grid grid-2\">\n",
    );
    for repo in repos {
        out.push_str(&project_entry(owner, repo));
    }
    out.push_str("  </div>\n</section>\n");
    out
}

fn footer(owner: &Owner) -> String {
    format!(
        r#"<footer>
  <div>
    <a href="{github}">GitHub</a>
    <a href="{linkedin}">LinkedIn</a>
    <a href="{mailto}">Email</a>
  </div>
  <p>&copy; {year} {name}. All rights reserved.</p>
</footer>
"#,
        github = escape_html(&owner.github_url()),
        linkedin = escape_html(owner.linkedin_url),
        mailto = escape_html(&owner.mailto()),
        year = owner.copyright_year,
        name = escape_html(owner.display_name),
    )
}

/// Render the whole page. Pure: same state and timestamp, same bytes.
pub fn render_page(portfolio: &Portfolio, owner: &Owner, generated_at: DateTime<Utc>) -> String {
    let mut body = String::new();
    body.push_str(&navbar(owner));
    body.push_str("<main>\n");
    body.push_str(&profile_header(owner, &portfolio.stats));
    body.push_str(&quick_stats(&portfolio.stats));
    body.push_str(&badge_cards(owner));
    body.push_str(&tech_stack());
    body.push_str(&projects(owner, &portfolio.repositories));
    body.push_str(&image_card(
        "contributions",
        "Contribution Graph",
        &badges::activity_graph(owner.username),
        "Contribution Graph",
    ));
    body.push_str(&image_card(
        "achievements",
        "GitHub Achievements",
        &badges::trophy_card(owner.username),
        "GitHub Trophies",
    ));
    body.push_str("</main>\n");
    body.push_str(&footer(owner));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="generated" content="{generated}">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
{body}</body>
</html>
"#,
        generated = generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        title = escape_html(owner.display_name),
        style = STYLE,
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::owner::OWNER;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn repo(id: u64, name: &str) -> Repository {
        Repository {
            id,
            name: name.to_string(),
            html_url: format!("https://github.com/tholumuzikhuboni/{name}"),
            stargazers_count: 0,
            forks_count: 0,
        }
    }

    fn loaded() -> Portfolio {
        Portfolio {
            stats: ProfileStats {
                followers: 42,
                stars: 8,
                forks: 1,
                repos: 7,
            },
            repositories: vec![repo(1, "alpha"), repo(2, "beta")],
        }
    }

    #[test]
    fn sections_render_in_fixed_order() {
        let page = render_page(&loaded(), &OWNER, fixed_time());
        let markers = [
            "<nav>",
            "id=\"about\"",
            "id=\"quick-stats\"",
            "id=\"stats-card\"",
            "id=\"streak-card\"",
            "id=\"tech\"",
            "id=\"projects\"",
            "id=\"contributions\"",
            "id=\"achievements\"",
            "<footer>",
        ];
        let positions: Vec<usize> = markers
            .iter()
            .map(|m| page.find(m).unwrap_or_else(|| panic!("missing {m}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn quick_stats_show_merged_values() {
        let page = render_page(&loaded(), &OWNER, fixed_time());
        assert!(page.contains(r#"<div id="stat-followers" class="card stat"><div class="label">Followers</div><div class="value">42</div>"#));
        assert!(page.contains(r#"<div class="label">Total Stars</div><div class="value">8</div>"#));
        assert!(page.contains(r#"<div class="label">Forks</div><div class="value">1</div>"#));
        assert!(page.contains(r#"<div class="label">Repositories</div><div class="value">7</div>"#));
        assert!(page.contains(r#"<span id="header-followers">42</span>"#));
        assert!(page.contains(r#"<span id="header-repos">7</span>"#));
    }

    #[test]
    fn one_project_per_repository_keyed_by_id() {
        let page = render_page(&loaded(), &OWNER, fixed_time());
        assert_eq!(page.matches("class=\"project\"").count(), 2);
        assert!(page.contains(r#"data-repo-id="1" href="https://github.com/tholumuzikhuboni/alpha" target="_blank" rel="noopener noreferrer""#));
        assert!(page.contains("data-repo-id=\"2\""));
        assert!(page.contains("repo=beta&amp;theme=transparent"));
    }

    #[test]
    fn unloaded_state_renders_zeros_and_no_projects() {
        let page = render_page(&Portfolio::new(), &OWNER, fixed_time());
        assert_eq!(page.matches("class=\"project\"").count(), 0);
        assert!(page.contains(r#"<div class="label">Total Stars</div><div class="value">0</div>"#));
        assert!(page.contains("id=\"projects\""));
    }

    #[test]
    fn repository_names_are_escaped() {
        let mut p = Portfolio::new();
        p.repositories.push(repo(3, "<script>"));
        let page = render_page(&p, &OWNER, fixed_time());
        assert!(!page.contains("<script>"));
        assert!(page.contains("alt=\"&lt;script&gt;\""));
    }

    #[test]
    fn static_content_is_present() {
        let page = render_page(&Portfolio::new(), &OWNER, fixed_time());
        assert_eq!(page.matches("https://skillicons.dev/icons?i=").count(), 10);
        assert!(page.contains("&copy; 2024 Tholumuzi Khuboni. All rights reserved."));
        assert!(page.contains("href=\"mailto:khuboni@tholumuzi.co.za\""));
        assert!(page.contains(r#"<meta name="generated" content="2024-05-01T12:00:00Z">"#));
    }

    #[test]
    fn escape_covers_attribute_quotes() {
        assert_eq!(escape_html(r#"a&"b'<>"#), "a&amp;&quot;b&#39;&lt;&gt;");
    }
}
