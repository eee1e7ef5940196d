// handlers/customer/mod.rs - /customer/* handlers
//
// Booking, calendar, feedback and messaging for customers.

pub mod appointments; // POST /customer/appointments, GET /customer/appointments/history/:customerId
pub mod calendar;     // GET /customer/calendar/:customerId
pub mod feedback;     // POST /customer/feedback, GET /customer/feedback/:customerId
pub mod messages;     // POST /customer/messages, GET /customer/messages/:customerId[/unread], PUT .../:id/read
