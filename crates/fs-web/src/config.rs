//! Site metadata: author, title, logo and social links.
//!
//! Compiled in so the server render and the hydrated page always agree.

pub struct SiteConfig {
    pub site: SiteInfo,
    pub logo: LogoConfig,
    pub socials: &'static [Social],
}

pub struct SiteInfo {
    /// Canonical site URL, with trailing slash.
    pub website: &'static str,
    pub author: &'static str,
    pub desc: &'static str,
    pub title: &'static str,
    /// Default Open Graph image, relative to the site root.
    pub og_image: &'static str,
    pub light_and_dark_mode: bool,
    pub posts_per_page: usize,
}

pub struct LogoConfig {
    pub enable: bool,
    /// SVG logo when true, PNG otherwise.
    pub svg: bool,
    pub width: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Social {
    pub name: &'static str,
    pub href: &'static str,
    pub link_title: &'static str,
    pub active: bool,
}

pub static CONFIG: SiteConfig = SiteConfig {
    site: SiteInfo {
        website: "https://fullystacked.net/",
        author: "Ollie Williams",
        desc: "A blog about frontend development, CSS, JavaScript, HTML, Bun, Deno, and more",
        title: "Fully Stacked",
        og_image: "logosquare.png",
        light_and_dark_mode: true,
        posts_per_page: 8,
    },
    logo: LogoConfig {
        enable: true,
        svg: true,
        width: 260,
    },
    socials: &[
        Social {
            name: "Github",
            href: "https://github.com/o-t-w",
            link_title: " Fully Stacked on Github",
            active: true,
        },
        Social {
            name: "LinkedIn",
            href: "https://www.linkedin.com/in/oliver-williams-8b5646184/",
            link_title: "Fully Stacked on LinkedIn",
            active: true,
        },
        Social {
            name: "Mail",
            href: "mailto:yourmail@gmail.com",
            link_title: "Send an email to Fully Stacked",
            active: false,
        },
        Social {
            name: "Twitter",
            href: "https://twitter.com/hypeddev",
            link_title: "Fully Stacked on Twitter",
            active: true,
        },
        Social {
            name: "Twitch",
            href: "https://github.com/satnaing/astro-paper",
            link_title: "Fully Stacked on Twitch",
            active: false,
        },
        Social {
            name: "CodePen",
            href: "https://github.com/satnaing/astro-paper",
            link_title: "Fully Stacked on CodePen",
            active: false,
        },
    ],
};

impl SiteConfig {
    /// Social links that should be displayed, in declaration order.
    pub fn active_socials(&self) -> impl Iterator<Item = &Social> + '_ {
        self.socials.iter().filter(|s| s.active)
    }

    /// Absolute URL for a site path (`"/"`, `"/sitemap.xml"`, `"about"`).
    pub fn canonical_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.site.website.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Logo asset path, or `None` when the text title is used instead.
    pub fn logo_path(&self) -> Option<&'static str> {
        match (self.logo.enable, self.logo.svg) {
            (false, _) => None,
            (true, true) => Some("/logo.svg"),
            (true, false) => Some("/logo.png"),
        }
    }

    /// Absolute URL of the default social-card image.
    pub fn og_image_url(&self) -> String {
        self.canonical_url(self.site.og_image)
    }
}
