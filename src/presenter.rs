use crate::constants::*;
use crate::dom;
use story_core::{Panel, Presenter, Scene};
use web_sys as web;

/// Presenter backed by the host page's DOM. Every element is resolved once
/// up front so a page missing a piece of UI fails at startup.
pub struct DomPresenter {
    body: Option<web::HtmlElement>,
    title_ui: web::Element,
    next_button: web::Element,
    choice_buttons: web::Element,
    ending_a: web::Element,
    ending_b: web::Element,
    overlay: web::Element,
}

impl DomPresenter {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            body: document.body(),
            title_ui: dom::required_element(document, TITLE_UI_ID)?,
            next_button: dom::required_element(document, NEXT_BUTTON_ID)?,
            choice_buttons: dom::required_element(document, CHOICE_BUTTONS_ID)?,
            ending_a: dom::required_element(document, ENDING_A_ID)?,
            ending_b: dom::required_element(document, ENDING_B_ID)?,
            overlay: dom::required_element(document, OVERLAY_ID)?,
        })
    }

    fn element(&self, panel: Panel) -> &web::Element {
        match panel {
            Panel::TitleCard => &self.title_ui,
            Panel::NextButton => &self.next_button,
            Panel::ChoiceButtons => &self.choice_buttons,
            Panel::EndingA => &self.ending_a,
            Panel::EndingB => &self.ending_b,
        }
    }
}

#[inline]
fn shown_style(panel: Panel) -> &'static str {
    match panel {
        Panel::ChoiceButtons => DISPLAY_FLEX,
        _ => DISPLAY_BLOCK,
    }
}

impl Presenter for DomPresenter {
    fn show_panel(&mut self, panel: Panel) {
        _ = self.element(panel).set_attribute("style", shown_style(panel));
    }

    fn hide_panel(&mut self, panel: Panel) {
        _ = self.element(panel).set_attribute("style", DISPLAY_NONE);
    }

    fn cover(&mut self) {
        _ = self.overlay.class_list().add_1(OVERLAY_ACTIVE_CLASS);
    }

    fn uncover(&mut self) {
        _ = self.overlay.class_list().remove_1(OVERLAY_ACTIVE_CLASS);
    }

    fn scene_activated(&mut self, scene: &Scene) {
        if let Some(body) = &self.body {
            _ = body.set_attribute(SCENE_ATTRIBUTE, &scene.kind().to_string());
        }
    }
}
