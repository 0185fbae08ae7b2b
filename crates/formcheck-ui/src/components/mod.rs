//! Yew components binding validation state to Bootstrap classes.

mod feedback;
mod form_input;

pub use feedback::{
    FeedbackForm, FeedbackFormProps, FeedbackFormTooltip, FeedbackFormTooltipProps, FieldFeedback,
    FieldFeedbackProps, FieldFeedbacks, FieldFeedbacksProps,
};
pub use form_input::{FormInput, FormInputProps};
