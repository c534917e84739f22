/// External endpoints and contact details for the site. Constructed once in
/// `main` and passed down as a prop so pages never reach for hard-coded
/// literals and tests can swap in their own endpoints.
#[derive(Clone, PartialEq, Debug)]
pub struct SiteConfig {
    /// Scheduling service link, opened in a new tab.
    pub booking_url: &'static str,
    pub contact_email: &'static str,
    /// WhatsApp deep link (wa.me).
    pub whatsapp_url: &'static str,
    /// Human-readable number shown next to the WhatsApp link.
    pub whatsapp_display: &'static str,
    /// Third-party form relay the contact form posts to.
    pub form_endpoint: &'static str,
    /// Fixed subject line attached to every relayed message.
    pub form_subject: &'static str,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            booking_url: "https://calendly.com/mirirabi18/15min",
            contact_email: "mirirabi18@gmail.com",
            whatsapp_url: "https://wa.me/61425796566",
            whatsapp_display: "+61 425 796 566",
            form_endpoint: "https://formsubmit.co/ajax/mirirabi18@gmail.com",
            form_subject: "New message from Miri Rabi website",
        }
    }
}
