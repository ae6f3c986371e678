//! One render function per wizard step.
//!
//! Screens draw the central panel only. Navigation the user asks for comes
//! back as a [`ScreenAction`] for the app to apply.

pub mod availability;
pub mod chat;
pub mod confirmation;
pub mod contact;
pub mod location;
pub mod welcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    None,
    Start,
    SendMessage,
    FinishChat,
    SubmitContact,
    SubmitLocation,
    SubmitRequest,
    Back,
    Reset,
}
