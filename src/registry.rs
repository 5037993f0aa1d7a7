//! The fixed set of content sections the page is made of.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    pub id: &'static str,
    pub nav_label: &'static str,
    pub display_title: &'static str,
    pub initially_active: bool,
}

pub const SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        id: "home",
        nav_label: "首页",
        display_title: "GameFlip - 首页",
        initially_active: true,
    },
    SectionSpec {
        id: "analyzer",
        nav_label: "解构师",
        display_title: "GameFlip - 解构师",
        initially_active: false,
    },
    SectionSpec {
        id: "about",
        nav_label: "关于我们",
        display_title: "GameFlip - 关于我们",
        initially_active: false,
    },
];

/// Ctrl+<digit> shortcut target, "1" being the first section.
pub fn shortcut_target(key: &str) -> Option<&'static str> {
    match key {
        "1" => Some("home"),
        "2" => Some("analyzer"),
        "3" => Some("about"),
        _ => None,
    }
}
