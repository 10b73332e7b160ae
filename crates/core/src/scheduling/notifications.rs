//! Customer email templates for job status changes

use chrono::NaiveDate;
use paneboard_domain::JobStatus;

/// Subject and HTML body of a status email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEmail {
    pub subject: String,
    pub html_body: String,
}

/// `Monday, May 5, 2025`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Render the email for `status`, or `None` when the status has no template.
pub fn render_status_email(
    status: JobStatus,
    customer_name: &str,
    date: NaiveDate,
    time: &str,
    business_name: &str,
) -> Option<StatusEmail> {
    let when = format_long_date(date);
    let sign_off = format!("<p>Best regards,<br>{business_name} Team</p>");

    let (subject, body) = match status {
        JobStatus::Confirmed => (
            "Job Confirmed: Window Cleaning Service",
            format!(
                "<h2>Your Window Cleaning Service is Confirmed</h2>\n\
                 <p>Dear {customer_name},</p>\n\
                 <p>We're pleased to confirm your window cleaning service has been scheduled for \
                 <strong>{when}</strong> at <strong>{time}</strong>.</p>\n\
                 <p>Our team will arrive within a 30-minute window of the scheduled time. \
                 We'll contact you if there are any changes to the schedule.</p>\n\
                 <p>If you need to make any changes to your appointment, please contact us at \
                 least 24 hours in advance.</p>\n\
                 <p>Thank you for choosing {business_name}!</p>\n"
            ),
        ),
        JobStatus::Completed => (
            "Job Completed: Window Cleaning Service",
            format!(
                "<h2>Your Window Cleaning Service is Complete</h2>\n\
                 <p>Dear {customer_name},</p>\n\
                 <p>We're pleased to inform you that your window cleaning service has been \
                 completed.</p>\n\
                 <p>Thank you for choosing {business_name}. We hope you're satisfied with our \
                 service!</p>\n\
                 <p>If you have a moment, we would appreciate your feedback or a review of our \
                 service.</p>\n"
            ),
        ),
        JobStatus::Cancelled => (
            "Job Cancelled: Window Cleaning Service",
            format!(
                "<h2>Your Window Cleaning Service Has Been Cancelled</h2>\n\
                 <p>Dear {customer_name},</p>\n\
                 <p>We're writing to confirm that your window cleaning service has been \
                 cancelled as requested.</p>\n\
                 <p>If you'd like to reschedule, please don't hesitate to contact us.</p>\n\
                 <p>Thank you for considering {business_name}.</p>\n"
            ),
        ),
        JobStatus::Rescheduled => (
            "Job Rescheduled: Window Cleaning Service",
            format!(
                "<h2>Your Window Cleaning Service Has Been Rescheduled</h2>\n\
                 <p>Dear {customer_name},</p>\n\
                 <p>We're writing to confirm that your window cleaning service has been \
                 rescheduled to <strong>{when}</strong> at <strong>{time}</strong>.</p>\n\
                 <p>If this new time does not work for you, please contact us as soon as \
                 possible.</p>\n\
                 <p>Thank you for your flexibility and for choosing {business_name}.</p>\n"
            ),
        ),
        JobStatus::Pending | JobStatus::Scheduled | JobStatus::InProgress => return None,
    };

    Some(StatusEmail { subject: subject.to_string(), html_body: format!("{body}{sign_off}") })
}
