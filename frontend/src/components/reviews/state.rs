use crate::context::LanguageHandle;
use common::model::Review;
use yew::prelude::*;

/// State of the reviews section and its submission dialog.
pub struct Reviews {
    /// Approved reviews, newest first.
    pub reviews: Vec<Review>,
    pub dialog_open: bool,
    /// Star rating picked in the dialog; defaults to 5.
    pub rating: i32,
    pub reviewer_name: String,
    pub company: String,
    pub review_text: String,
    /// One submission in flight at a time.
    pub submitting: bool,
    pub lang: LanguageHandle,
    pub subscription: usize,
    pub(super) _listen: ContextHandle<LanguageHandle>,
}

impl Reviews {
    pub fn new(
        lang: LanguageHandle,
        listen: ContextHandle<LanguageHandle>,
        subscription: usize,
    ) -> Self {
        Reviews {
            reviews: Vec::new(),
            dialog_open: false,
            rating: 5,
            reviewer_name: String::new(),
            company: String::new(),
            review_text: String::new(),
            submitting: false,
            lang,
            subscription,
            _listen: listen,
        }
    }

    pub fn reset_form(&mut self) {
        self.rating = 5;
        self.reviewer_name.clear();
        self.company.clear();
        self.review_text.clear();
    }
}
