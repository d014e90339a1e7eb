#[cfg(debug_assertions)]
pub fn get_lead_store_url() -> &'static str {
    match option_env!("LEAD_STORE_URL") {
        Some(url) => url,
        None => "http://localhost:54321", // local supabase stack
    }
}

#[cfg(not(debug_assertions))]
pub fn get_lead_store_url() -> &'static str {
    match option_env!("LEAD_STORE_URL") {
        Some(url) => url,
        None => "",
    }
}

pub fn get_lead_store_key() -> &'static str {
    match option_env!("LEAD_STORE_KEY") {
        Some(key) => key,
        None => "",
    }
}

pub const LEADS_TABLE: &str = "project_leads";

pub const CONTACT_EMAIL: &str = "ibrakhimmmmm@gmail.com";

// How long the success panel stays before the modal closes itself
pub const LEAD_SUCCESS_CLOSE_MS: u32 = 2000;

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Telegram", "https://t.me/+zjzVXH5V3zZIMDMy"),
    ("YouTube", "https://youtube.com/@r1chag?si=bCRqQqI8W1DFEXAR"),
    (
        "Instagram",
        "https://www.instagram.com/r1chag?igsh=MTF3NWVxanNzeTFjZA%3D%3D&utm_source=qr",
    ),
];
