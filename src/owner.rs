/// Static identity rendered on the page. Only `username` is used to talk to
/// GitHub and the badge services; everything else is display text.
#[derive(Debug, Clone, Copy)]
pub struct Owner {
    pub username: &'static str,
    pub display_name: &'static str,
    pub tagline: &'static str,
    pub linkedin_url: &'static str,
    pub portfolio_url: &'static str,
    pub email: &'static str,
    pub copyright_year: u16,
}

pub const OWNER: Owner = Owner {
    username: "tholumuzikhuboni",
    display_name: "Tholumuzi Khuboni",
    tagline: "Passionate Front-End Developer",
    linkedin_url: "https://linkedin.com/in/tholumuzikhuboni",
    portfolio_url: "https://portfolio.tholumuzi.co.za",
    email: "khuboni@tholumuzi.co.za",
    copyright_year: 2024,
};

impl Owner {
    pub fn github_url(&self) -> String {
        format!("https://github.com/{}", self.username)
    }

    pub fn avatar_url(&self) -> String {
        format!("https://avatars.githubusercontent.com/{}", self.username)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}
