pub mod company;
pub mod demo;
pub mod inquiry;
pub mod project;
pub mod review;
pub mod service;
pub mod team;
pub mod template;

pub use company::CompanyInfo;
pub use demo::{Demo, NewDemo};
pub use inquiry::{ContactInquiry, InquiryStatus, NewInquiry};
pub use project::{NewProject, PortfolioProject};
pub use review::{NewReview, Review};
pub use service::Service;
pub use team::{NewTeamMember, TeamMember};
pub use template::{NewServiceTemplate, ServiceTemplate};
