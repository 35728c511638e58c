//! URL templates for the third-party badge-image services embedded in the
//! page. Responses are never fetched or checked here.

use urlencoding::encode;

/// One entry of the fixed technology-icon grid.
#[derive(Debug, Clone, Copy)]
pub struct TechIcon {
    pub id: &'static str,
    pub label: &'static str,
}

pub const TECH_STACK: [TechIcon; 10] = [
    TechIcon { id: "html", label: "HTML" },
    TechIcon { id: "git", label: "Git" },
    TechIcon { id: "css", label: "CSS" },
    TechIcon { id: "js", label: "JavaScript" },
    TechIcon { id: "react", label: "React" },
    TechIcon { id: "ts", label: "TypeScript" },
    TechIcon { id: "firebase", label: "Firebase" },
    TechIcon { id: "tailwind", label: "Tailwind CSS" },
    TechIcon { id: "gcp", label: "Google Cloud" },
    TechIcon { id: "aws", label: "AWS" },
];

pub fn stats_card(username: &str) -> String {
    format!(
        "https://github-readme-stats.vercel.app/api?username={}&show_icons=true&theme=transparent&hide_border=true&count_private=true&bg_color=ffffff",
        encode(username)
    )
}

pub fn streak_card(username: &str) -> String {
    format!(
        "https://github-readme-streak-stats.herokuapp.com/?user={}&theme=transparent&hide_border=true&background=ffffff",
        encode(username)
    )
}

pub fn pin_card(username: &str, repo: &str) -> String {
    format!(
        "https://github-readme-stats.vercel.app/api/pin/?username={}&repo={}&theme=transparent&hide_border=true&bg_color=ffffff",
        encode(username),
        encode(repo)
    )
}

pub fn activity_graph(username: &str) -> String {
    format!(
        "https://github-readme-activity-graph.vercel.app/graph?username={}&theme=minimal&hide_border=true&bg_color=ffffff",
        encode(username)
    )
}

pub fn trophy_card(username: &str) -> String {
    format!(
        "https://github-profile-trophy.vercel.app/?username={}&theme=flat&no-frame=true&row=1&column=6&margin-w=15",
        encode(username)
    )
}

pub fn tech_icon(icon: &TechIcon) -> String {
    format!("https://skillicons.dev/icons?i={}", icon.id)
}
