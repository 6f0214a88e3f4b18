//! Edit profile overlay.
//!
//! Composed on top of the detail page while editing. Field values are
//! pre-filled from the selected profile; the host keeps the values being
//! typed and passes them back on submit.

use crate::app::{Command, EditForm, FormField};
use crate::domain::ArtistProfile;
use crate::i18n::Translator;
use crate::ui::bindings::{Binding, Bindings, Intent, Trigger};
use crate::ui::viewmodel::{ElementId, NodeKind, Segment, ViewNode};

/// Builds the overlay and registers its close, cancel, dismiss and submit
/// bindings.
pub fn edit_overlay(
    profile: &ArtistProfile,
    t: &Translator<'_>,
    bindings: &mut Bindings,
) -> ViewNode {
    let close = Command::SetEditing(false);

    bindings.register(
        Binding::command(ElementId::ModalBackdrop, close.clone()).with_trigger(Trigger::Dismiss),
    );
    bindings.register(Binding::command(ElementId::ModalClose, close.clone()));
    bindings.register(Binding::command(ElementId::ModalCancel, close));
    bindings.register(Binding {
        element: ElementId::EditForm,
        trigger: Trigger::Submit,
        hotkey: None,
        intent: Intent::SubmitProfile { base: Box::new(profile.clone()) },
    });

    let prefill = EditForm::prefill(profile);
    let mut fields = Vec::with_capacity(FormField::all().len() + 1);
    for &field in FormField::all() {
        if field.starts_section() {
            fields.push(ViewNode::line(vec![Segment::accent(t.t("socialLinks"))]));
        }
        fields.push(
            ViewNode::new(NodeKind::Input {
                label: t.t(field.label_key()).to_string(),
                value: prefill.value(field).to_string(),
                placeholder: field.name().to_string(),
            })
            .with_element(ElementId::FormField(field)),
        );
    }

    let form = ViewNode::section(None, fields);
    let buttons = ViewNode::new(NodeKind::Toolbar).with_children(vec![
        ViewNode::button(ElementId::ModalCancel, t.t("cancel"), false),
        ViewNode::button(ElementId::EditForm, t.t("saveChanges"), true),
        ViewNode::button(ElementId::ModalClose, t.t("close"), false),
    ]);

    ViewNode::new(NodeKind::Overlay {
        title: t.t("editProfileTitle").to_string(),
    })
    .with_element(ElementId::ModalBackdrop)
    .with_children(vec![form, buttons])
}
