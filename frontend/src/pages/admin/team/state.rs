use common::model::{NewTeamMember, TeamMember};
use common::text::{join_comma_list, split_comma_list};

/// Team management state: the member list plus the create/edit dialog.
pub struct Team {
    pub members: Vec<TeamMember>,
    pub dialog_open: bool,
    /// Id of the member being edited; `None` while creating.
    pub editing: Option<String>,
    pub form: MemberForm,
    /// Photo picked in the dialog, uploaded on save.
    pub photo: Option<web_sys::File>,
    pub saving: bool,
    pub subscription: usize,
}

impl Team {
    pub fn new(subscription: usize) -> Self {
        Team {
            members: Vec::new(),
            dialog_open: false,
            editing: None,
            form: MemberForm::default(),
            photo: None,
            saving: false,
            subscription,
        }
    }
}

/// Dialog fields as edited; skills stay comma-delimited text until
/// save.
#[derive(Default)]
pub struct MemberForm {
    pub name: String,
    pub title: String,
    pub company: String,
    pub bio: String,
    pub photo_url: String,
    pub skills: String,
    pub linkedin: String,
    pub twitter: String,
    pub display_order: i32,
}

impl MemberForm {
    pub fn blank(next_order: i32) -> Self {
        MemberForm {
            display_order: next_order,
            ..MemberForm::default()
        }
    }

    pub fn from_member(member: &TeamMember) -> Self {
        MemberForm {
            name: member.name.clone(),
            title: member.title.clone(),
            company: member.company.clone().unwrap_or_default(),
            bio: member.bio.clone(),
            photo_url: member.photo_url.clone(),
            skills: join_comma_list(&member.skills),
            linkedin: member.linkedin.clone().unwrap_or_default(),
            twitter: member.twitter.clone().unwrap_or_default(),
            display_order: member.display_order,
        }
    }

    pub fn payload(&self, photo_url: String) -> NewTeamMember {
        NewTeamMember {
            name: self.name.trim().to_string(),
            title: self.title.trim().to_string(),
            company: optional(&self.company),
            bio: self.bio.trim().to_string(),
            photo_url,
            skills: split_comma_list(&self.skills),
            linkedin: optional(&self.linkedin),
            twitter: optional(&self.twitter),
            display_order: self.display_order,
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_form_seeds_the_next_display_order() {
        let form = MemberForm::blank(3);
        assert_eq!(form.display_order, 3);
        assert!(form.name.is_empty());
        assert!(form.skills.is_empty());
    }

    #[test]
    fn payload_normalizes_blank_optionals() {
        let form = MemberForm {
            name: " Ada ".into(),
            title: "Engineer".into(),
            company: "  ".into(),
            bio: "Builds things".into(),
            skills: "rust, wasm".into(),
            linkedin: "https://linkedin.com/in/ada".into(),
            ..MemberForm::default()
        };
        let payload = form.payload("https://cdn/x.png".into());
        assert_eq!(payload.name, "Ada");
        assert_eq!(payload.company, None);
        assert_eq!(payload.skills, vec!["rust", "wasm"]);
        assert_eq!(
            payload.linkedin.as_deref(),
            Some("https://linkedin.com/in/ada")
        );
        assert_eq!(payload.twitter, None);
    }

    #[test]
    fn form_round_trips_skills_as_comma_text() {
        let member = TeamMember {
            id: "1".into(),
            name: "Ada".into(),
            title: "Engineer".into(),
            company: None,
            bio: "Builds things".into(),
            photo_url: String::new(),
            skills: vec!["rust".into(), "wasm".into()],
            linkedin: None,
            twitter: None,
            display_order: 1,
            created_at: String::new(),
        };
        let form = MemberForm::from_member(&member);
        assert_eq!(form.skills, "rust, wasm");
        assert_eq!(form.payload(String::new()).skills, member.skills);
    }
}
