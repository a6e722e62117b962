use std::collections::BTreeSet;
use std::rc::Rc;

use yew::prelude::*;

use crate::config::SCROLL_THRESHOLD_PX;
use crate::inquiry::{ContactDraft, FormField};

/// Page sections reachable from the navigation controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Services,
    Clients,
    Results,
    Pricing,
    Faq,
    Contact,
}

impl Section {
    /// Order used by the desktop and mobile menus.
    pub const MENU: [Section; 6] = [
        Section::Services,
        Section::Clients,
        Section::Results,
        Section::Pricing,
        Section::Faq,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Services => "services",
            Section::Clients => "clients",
            Section::Results => "results",
            Section::Pricing => "pricing",
            Section::Faq => "faq",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Services => "Services",
            Section::Clients => "Clients",
            Section::Results => "Results",
            Section::Pricing => "Pricing",
            Section::Faq => "FAQ",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Everything the landing page renders conditionally. Lives for one page
/// session and is only changed through [`ViewAction`]s.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub menu_open: bool,
    pub scrolled: bool,
    pub trial_booking: bool,
    pub submission: SubmissionStatus,
    /// Id of the latest submission attempt; 0 before the first one.
    pub attempt: u32,
    pub faq_open: BTreeSet<&'static str>,
    pub form: ContactDraft,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewAction {
    ToggleMenu,
    Scrolled(f64),
    /// A navigation control found its target and scrolled to it.
    Navigated(Section),
    ToggleFaq(&'static str),
    EditField(FormField, String),
    SetConsent(bool),
    SubmissionStarted { attempt: u32 },
    SubmissionFinished { attempt: u32, delivered: bool },
    ResetStatus { attempt: u32 },
}

impl ViewState {
    pub fn is_faq_open(&self, id: &str) -> bool {
        self.faq_open.contains(id)
    }

    fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::ToggleMenu => self.menu_open = !self.menu_open,
            ViewAction::Scrolled(offset) => self.scrolled = offset > SCROLL_THRESHOLD_PX,
            ViewAction::Navigated(section) => {
                self.menu_open = false;
                if section == Section::Contact {
                    self.trial_booking = true;
                }
            }
            ViewAction::ToggleFaq(id) => {
                if !self.faq_open.remove(id) {
                    self.faq_open.insert(id);
                }
            }
            ViewAction::EditField(field, value) => self.form.set(field, value),
            ViewAction::SetConsent(consent) => self.form.consent = consent,
            ViewAction::SubmissionStarted { attempt } => self.attempt = attempt,
            ViewAction::SubmissionFinished { attempt, delivered } => {
                if attempt != self.attempt {
                    return;
                }
                if delivered {
                    self.submission = SubmissionStatus::Success;
                    self.form = ContactDraft::default();
                } else {
                    self.submission = SubmissionStatus::Error;
                }
            }
            ViewAction::ResetStatus { attempt } => {
                if attempt == self.attempt {
                    self.submission = SubmissionStatus::Idle;
                }
            }
        }
    }
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        // Most scroll events leave the flag where it is; skip the copy.
        if let ViewAction::Scrolled(offset) = action {
            if (offset > SCROLL_THRESHOLD_PX) == self.scrolled {
                return self;
            }
        }

        let mut next = (*self).clone();
        next.apply(action);
        // Handing back the same Rc keeps scroll events from re-rendering.
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: impl IntoIterator<Item = ViewAction>) -> Rc<ViewState> {
        actions
            .into_iter()
            .fold(Rc::new(ViewState::default()), |state, action| state.reduce(action))
    }

    fn fill_ana() -> Vec<ViewAction> {
        vec![
            ViewAction::EditField(FormField::Name, "Ana".to_string()),
            ViewAction::EditField(FormField::Email, "ana@x.com".to_string()),
            ViewAction::EditField(FormField::Message, "Hi".to_string()),
            ViewAction::SetConsent(true),
        ]
    }

    #[test]
    fn navbar_flag_flips_strictly_above_threshold() {
        for offset in [0.0, 10.0, 49.9, 50.0] {
            assert!(!run([ViewAction::Scrolled(offset)]).scrolled, "offset {offset}");
        }
        for offset in [50.1, 51.0, 600.0, 10_000.0] {
            assert!(run([ViewAction::Scrolled(offset)]).scrolled, "offset {offset}");
        }
        let back_up = run([ViewAction::Scrolled(300.0), ViewAction::Scrolled(12.0)]);
        assert!(!back_up.scrolled);
    }

    #[test]
    fn unchanged_scroll_keeps_the_same_state() {
        let state = run([ViewAction::Scrolled(120.0)]);
        let again = state.clone().reduce(ViewAction::Scrolled(140.0));
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn crossing_the_threshold_builds_a_new_state() {
        let state = run(fill_ana());
        let still_top = state.clone().reduce(ViewAction::Scrolled(10.0));
        assert!(Rc::ptr_eq(&state, &still_top));

        let scrolled = still_top.clone().reduce(ViewAction::Scrolled(51.0));
        assert!(!Rc::ptr_eq(&still_top, &scrolled));
        assert!(scrolled.scrolled);
        assert_eq!(scrolled.form, state.form);
    }

    #[test]
    fn trial_booking_sticks_after_leaving_contact() {
        let state = run([ViewAction::Navigated(Section::Pricing)]);
        assert!(!state.trial_booking);

        let state = state.reduce(ViewAction::Navigated(Section::Contact));
        assert!(state.trial_booking);

        let state = state
            .reduce(ViewAction::Navigated(Section::Faq))
            .reduce(ViewAction::Navigated(Section::Services));
        assert!(state.trial_booking);
    }

    #[test]
    fn navigating_closes_the_mobile_menu() {
        let state = run([ViewAction::ToggleMenu]);
        assert!(state.menu_open);
        let state = state.reduce(ViewAction::Navigated(Section::Results));
        assert!(!state.menu_open);
        let state = state.reduce(ViewAction::ToggleMenu).reduce(ViewAction::ToggleMenu);
        assert!(!state.menu_open);
    }

    #[test]
    fn successful_submission_clears_the_form() {
        let mut actions = fill_ana();
        actions.push(ViewAction::EditField(FormField::Company, "IDOM".to_string()));
        actions.push(ViewAction::SubmissionStarted { attempt: 1 });
        actions.push(ViewAction::SubmissionFinished { attempt: 1, delivered: true });

        let state = run(actions);
        assert_eq!(state.submission, SubmissionStatus::Success);
        assert_eq!(state.form, ContactDraft::default());
        assert!(state.form.name.is_empty());
        assert!(!state.form.consent);
    }

    #[test]
    fn failed_submission_keeps_what_was_typed() {
        let mut actions = fill_ana();
        actions.push(ViewAction::SubmissionStarted { attempt: 1 });
        actions.push(ViewAction::SubmissionFinished { attempt: 1, delivered: false });

        let state = run(actions);
        assert_eq!(state.submission, SubmissionStatus::Error);
        assert_eq!(state.form.name, "Ana");
        assert_eq!(state.form.message, "Hi");
    }

    #[test]
    fn reset_returns_to_idle_from_either_outcome() {
        for delivered in [true, false] {
            let state = run([
                ViewAction::SubmissionStarted { attempt: 1 },
                ViewAction::SubmissionFinished { attempt: 1, delivered },
                ViewAction::ResetStatus { attempt: 1 },
            ]);
            assert_eq!(state.submission, SubmissionStatus::Idle);
        }
    }

    #[test]
    fn stale_reset_does_not_clear_a_newer_status() {
        let state = run([
            ViewAction::SubmissionStarted { attempt: 1 },
            ViewAction::SubmissionFinished { attempt: 1, delivered: false },
            ViewAction::SubmissionStarted { attempt: 2 },
            ViewAction::SubmissionFinished { attempt: 2, delivered: true },
            ViewAction::ResetStatus { attempt: 1 },
        ]);
        assert_eq!(state.submission, SubmissionStatus::Success);

        let state = state.reduce(ViewAction::ResetStatus { attempt: 2 });
        assert_eq!(state.submission, SubmissionStatus::Idle);
    }

    #[test]
    fn late_completion_of_an_older_attempt_is_ignored() {
        let state = run([
            ViewAction::SubmissionStarted { attempt: 1 },
            ViewAction::SubmissionStarted { attempt: 2 },
            ViewAction::SubmissionFinished { attempt: 1, delivered: false },
        ]);
        assert_eq!(state.submission, SubmissionStatus::Idle);

        let state = state.reduce(ViewAction::SubmissionFinished { attempt: 2, delivered: true });
        assert_eq!(state.submission, SubmissionStatus::Success);
    }

    #[test]
    fn faq_entries_toggle_independently() {
        let state = run([ViewAction::ToggleFaq("faq-2"), ViewAction::ToggleFaq("faq-5")]);
        assert!(state.is_faq_open("faq-2"));
        assert!(state.is_faq_open("faq-5"));
        assert!(!state.is_faq_open("faq-1"));

        let state = state.reduce(ViewAction::ToggleFaq("faq-2"));
        assert!(!state.is_faq_open("faq-2"));
        assert!(state.is_faq_open("faq-5"));
    }

    #[test]
    fn faq_does_not_follow_the_scroll_flag() {
        let state = run([ViewAction::Scrolled(900.0)]);
        assert!(state.faq_open.is_empty());
    }

    #[test]
    fn book_free_trial_relabels_form_and_tags_payload() {
        let mut actions = vec![ViewAction::Navigated(Section::Contact)];
        actions.extend(fill_ana());
        let state = run(actions);

        let copy = crate::components::contact_form::form_copy(state.trial_booking);
        assert_eq!(copy.heading, "Book Your Free 60-Minute Trial");
        let body = crate::inquiry::encode_inquiry(&state.form, state.trial_booking);
        assert!(body.contains("inquiry-type=Free%20Trial%20Booking"));
    }

    #[test]
    fn section_ids_match_the_page_anchors() {
        let ids: Vec<_> = Section::MENU.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["services", "clients", "results", "pricing", "faq", "contact"]);
        assert_eq!(Section::Faq.label(), "FAQ");
    }
}
