pub mod cmd {
    // Auth commands
    pub const SIGN_UP: &str = "relato auth signup <email> --password <password> --name <name>";
    pub const SIGN_IN: &str = "relato auth signin <email> --password <password>";
    pub const WHOAMI: &str = "relato auth whoami";

    // Report commands
    pub const REPORT_TEMPLATE: &str = "relato report template";
    pub const REPORT_CREATE: &str = "relato report create --file <draft.toml>";

    // Feed commands
    pub const FEED_LIST: &str = "relato feed list";
    pub const SAVED_LIST: &str = "relato saved list";

    // Profile commands
    pub const PROFILE_SHOW: &str = "relato profile show";
    pub const PROFILE_AVATAR: &str = "relato profile avatar --image <path>";
}

pub mod fmt {
    pub fn report_show(id: &str) -> String {
        format!("relato report show {}", id)
    }

    pub fn report_order(id: &str) -> String {
        format!("relato report order {}", id)
    }

    pub fn report_move(id: &str) -> String {
        format!("relato report move {} <from> <to>", id)
    }

    pub fn report_attach(id: &str) -> String {
        format!("relato report attach {} --section <key> --image <path>", id)
    }

    pub fn report_detach(id: &str, section: &str) -> String {
        format!("relato report detach {} {} <index>", id, section)
    }

    pub fn report_edit(id: &str) -> String {
        format!("relato report edit {} --file <draft.toml>", id)
    }

    pub fn like(id: &str) -> String {
        format!("relato like {}", id)
    }

    pub fn save(id: &str) -> String {
        format!("relato save {}", id)
    }
}
