mod copy_button;
mod external_link;
mod footer;
mod logo;
mod section;
mod socials;

pub use copy_button::{COPY_BUTTON_TAG, CopyButton};
pub use external_link::ExternalLink;
pub use footer::SiteFooter;
pub use logo::SiteLogo;
pub use section::Section;
pub use socials::SocialLinks;
