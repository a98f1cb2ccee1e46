use common::model::{CompanyInfo, Service};

/// State of the public contact form and the direct-contact card next
/// to it. Select fields hold the raw option values; empty string means
/// nothing picked yet.
pub struct Contact {
    pub company: Option<CompanyInfo>,
    pub services: Vec<Service>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub service_type: String,
    pub project_description: String,
    pub timeline: String,
    pub budget_range: String,
    /// One submission in flight at a time.
    pub submitting: bool,
}

impl Contact {
    pub fn new(service_type: String) -> Self {
        Contact {
            company: None,
            services: Vec::new(),
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            company_name: String::new(),
            service_type,
            project_description: String::new(),
            timeline: String::new(),
            budget_range: String::new(),
            submitting: false,
        }
    }

    pub fn reset_form(&mut self) {
        self.full_name.clear();
        self.email.clear();
        self.phone.clear();
        self.company_name.clear();
        self.service_type.clear();
        self.project_description.clear();
        self.timeline.clear();
        self.budget_range.clear();
    }
}
