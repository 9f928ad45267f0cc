mod home;
pub use home::Home;

mod categories;
pub use categories::Categories;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod profile;
pub use profile::Profile;

mod my_ads;
pub use my_ads::MyAds;

mod create_ad;
pub use create_ad::CreateAd;

mod ad_detail;
pub use ad_detail::AdDetail;

mod not_found;
pub use not_found::NotFound;

use dioxus::prelude::*;
use ui::icons::{FaBriefcase, FaCar, FaHouse, FaMobileScreen, FaShirt, FaTag, FaWrench};
use ui::Icon;

/// Icon for a top-level category slug.
#[component]
pub(crate) fn CategoryIcon(slug: String, #[props(default = 24)] size: u32) -> Element {
    match slug.as_str() {
        "transport" => rsx! { Icon { icon: FaCar, width: size, height: size } },
        "real-estate" => rsx! { Icon { icon: FaHouse, width: size, height: size } },
        "jobs" => rsx! { Icon { icon: FaBriefcase, width: size, height: size } },
        "electronics" => rsx! { Icon { icon: FaMobileScreen, width: size, height: size } },
        "fashion" => rsx! { Icon { icon: FaShirt, width: size, height: size } },
        "home-garden" => rsx! { Icon { icon: FaWrench, width: size, height: size } },
        _ => rsx! { Icon { icon: FaTag, width: size, height: size } },
    }
}
