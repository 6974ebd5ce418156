pub const ICON_BLOG: &str = r#"<svg viewBox="0 0 180 120" xmlns="http://www.w3.org/2000/svg"><rect x="1" y="1" width="178" height="118" rx="4" fill="#fff" stroke="#c3c4c7"/><rect x="20" y="16" width="140" height="10" rx="2" fill="#8c8f94"/><rect x="20" y="36" width="110" height="6" rx="2" fill="#dcdcde"/><rect x="20" y="48" width="120" height="6" rx="2" fill="#dcdcde"/><rect x="20" y="68" width="140" height="10" rx="2" fill="#8c8f94"/><rect x="20" y="88" width="100" height="6" rx="2" fill="#dcdcde"/><rect x="20" y="100" width="125" height="6" rx="2" fill="#dcdcde"/></svg>"#;

pub const ICON_PAGE: &str = r#"<svg viewBox="0 0 180 120" xmlns="http://www.w3.org/2000/svg"><rect x="1" y="1" width="178" height="118" rx="4" fill="#fff" stroke="#c3c4c7"/><rect x="12" y="12" width="156" height="52" rx="2" fill="#dcdcde"/><rect x="50" y="32" width="80" height="10" rx="2" fill="#8c8f94"/><rect x="20" y="76" width="140" height="6" rx="2" fill="#dcdcde"/><rect x="20" y="88" width="120" height="6" rx="2" fill="#dcdcde"/><rect x="20" y="100" width="130" height="6" rx="2" fill="#dcdcde"/></svg>"#;

pub const ICON_GRID: &str = r#"<svg viewBox="0 0 180 120" xmlns="http://www.w3.org/2000/svg"><rect x="1" y="1" width="178" height="118" rx="4" fill="#fff" stroke="#c3c4c7"/><rect x="14" y="14" width="46" height="42" rx="2" fill="#dcdcde"/><rect x="67" y="14" width="46" height="42" rx="2" fill="#dcdcde"/><rect x="120" y="14" width="46" height="42" rx="2" fill="#dcdcde"/><rect x="14" y="64" width="46" height="42" rx="2" fill="#dcdcde"/><rect x="67" y="64" width="46" height="42" rx="2" fill="#dcdcde"/><rect x="120" y="64" width="46" height="42" rx="2" fill="#dcdcde"/></svg>"#;

pub const ICON_STORE: &str = r#"<svg viewBox="0 0 180 120" xmlns="http://www.w3.org/2000/svg"><rect x="1" y="1" width="178" height="118" rx="4" fill="#fff" stroke="#c3c4c7"/><path d="M60 40h60l-6 34H66z" fill="none" stroke="#8c8f94" stroke-width="4" stroke-linejoin="round"/><path d="M52 32h8" stroke="#8c8f94" stroke-width="4" stroke-linecap="round"/><circle cx="72" cy="86" r="5" fill="#8c8f94"/><circle cx="108" cy="86" r="5" fill="#8c8f94"/></svg>"#;
