use askama::Template;
use askama_web::WebTemplate;

#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub(crate) struct LoginTemplate {
    pub(crate) app_name: String,
    pub(crate) error: String,
    pub(crate) next: String,
    pub(crate) branches: Vec<BranchOption>,
}

/// A branch with its (mock) sign-in credentials for the login page picker.
pub(crate) struct BranchOption {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) password: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub(crate) struct DashboardTemplate {
    pub(crate) app_name: String,
    pub(crate) manager: String,
    pub(crate) active_page: &'static str,
    pub(crate) error: String,
    pub(crate) active_tab: String,
    pub(crate) rooms: Vec<SpaceCard>,
    pub(crate) roofs: Vec<SpaceCard>,
    pub(crate) selected: Option<SpaceDetail>,
}

pub(crate) struct SpaceCard {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) capacity: u32,
    pub(crate) status: String,
}

pub(crate) struct SpaceDetail {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) kind: String,
    pub(crate) capacity: u32,
    pub(crate) status: String,
    pub(crate) available: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "bookings.html")]
pub(crate) struct BookingsTemplate {
    pub(crate) app_name: String,
    pub(crate) manager: String,
    pub(crate) active_page: &'static str,
    pub(crate) filter: String,
    pub(crate) bookings: Vec<BookingCard>,
}

pub(crate) struct BookingCard {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) space: String,
    pub(crate) branch: String,
    pub(crate) date: String,
    pub(crate) start_time: String,
    pub(crate) end_time: String,
    pub(crate) guests: String,
    pub(crate) total_price: String,
    pub(crate) status: String,
    pub(crate) status_class: &'static str,
    pub(crate) payment_proof_url: String,
    pub(crate) pending: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "booking_new.html")]
pub(crate) struct NewBookingTemplate {
    pub(crate) app_name: String,
    pub(crate) manager: String,
    pub(crate) active_page: &'static str,
    pub(crate) space_kind: String,
    pub(crate) space_id: String,
    pub(crate) error: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "notifications.html")]
pub(crate) struct NotificationsTemplate {
    pub(crate) app_name: String,
    pub(crate) manager: String,
    pub(crate) active_page: &'static str,
    pub(crate) notifications: Vec<NotificationRow>,
}

pub(crate) struct NotificationRow {
    pub(crate) id: String,
    pub(crate) text: String,
    pub(crate) kind: String,
    pub(crate) created_at: String,
    pub(crate) is_read: bool,
}
