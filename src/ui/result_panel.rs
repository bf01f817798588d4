use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    app::Sender,
    browser::HoldBrowser,
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
};

use super::theme::{factor_text_color, muted_text_color, severity_color, severity_label_color};
use crate::app::controllers::presenter::Presentation;
use crate::app::domain::messages::Message;

const VERDICT_HEIGHT: i32 = 50;
const LINKS_HEIGHT: i32 = 130;

/// FLTK treats '@' in labels as a symbol prefix.
fn escape_label(text: &str) -> String {
    text.replace('@', "@@")
}

/// A browser whose rows open a URL when selected.
fn link_browser(label: &str, links: &Rc<RefCell<Vec<String>>>, sender: &Sender<Message>) -> HoldBrowser {
    let mut browser = HoldBrowser::default().with_label(label);
    browser.set_align(Align::Top | Align::Left);
    let links = links.clone();
    let s = *sender;
    browser.set_callback(move |b| {
        let line = b.value();
        if line < 1 {
            return;
        }
        if let Some(url) = links.borrow().get((line - 1) as usize) {
            if !url.is_empty() {
                s.send(Message::OpenLink(url.clone()));
            }
        }
    });
    browser
}

pub struct ResultPanel {
    pub group: Flex,
    verdict: Frame,
    confidence: Frame,
    explanation: Frame,
    suggestion: Frame,
    factors: HoldBrowser,
    links_row: Flex,
    news: HoldBrowser,
    tools: HoldBrowser,
    news_links: Rc<RefCell<Vec<String>>>,
    tool_links: Rc<RefCell<Vec<String>>>,
}

impl ResultPanel {
    /// Build the panel inside the current parent group.
    pub fn new(sender: &Sender<Message>) -> Self {
        let mut group = Flex::default();
        group.set_type(FlexType::Column);
        group.set_spacing(6);

        let mut verdict = Frame::default();
        verdict.set_frame(FrameType::FlatBox);
        verdict.set_label_size(20);
        verdict.set_label_font(Font::HelveticaBold);
        group.fixed(&verdict, VERDICT_HEIGHT);

        let mut confidence = Frame::default();
        confidence.set_label_size(14);
        group.fixed(&confidence, 25);

        let mut explanation = Frame::default();
        explanation.set_align(Align::Left | Align::Inside | Align::Wrap);
        explanation.set_label_size(13);
        group.fixed(&explanation, 50);

        let mut suggestion = Frame::default();
        suggestion.set_align(Align::Left | Align::Inside | Align::Wrap);
        suggestion.set_label_size(13);
        suggestion.set_label_color(muted_text_color());
        group.fixed(&suggestion, 40);

        let mut factors_title = Frame::default().with_label("Key factors");
        factors_title.set_label_font(Font::HelveticaBold);
        factors_title.set_align(Align::Left | Align::Inside);
        group.fixed(&factors_title, 22);

        let factors = HoldBrowser::default();

        let news_links = Rc::new(RefCell::new(Vec::new()));
        let tool_links = Rc::new(RefCell::new(Vec::new()));

        let mut links_row = Flex::default();
        links_row.set_type(FlexType::Row);
        links_row.set_spacing(10);
        links_row.set_margins(0, 20, 0, 0);
        let news = link_browser("Related news", &news_links, sender);
        let tools = link_browser("Verify it yourself", &tool_links, sender);
        links_row.end();
        group.fixed(&links_row, LINKS_HEIGHT);

        group.end();

        let mut panel = Self {
            group,
            verdict,
            confidence,
            explanation,
            suggestion,
            factors,
            links_row,
            news,
            tools,
            news_links,
            tool_links,
        };
        panel.clear();
        panel
    }

    pub fn clear(&mut self) {
        self.factors.clear();
        self.news.clear();
        self.tools.clear();
        self.news_links.borrow_mut().clear();
        self.tool_links.borrow_mut().clear();
        self.group.hide();
    }

    pub fn show_presentation(&mut self, p: &Presentation) {
        let severity = p.verdict.severity;
        self.verdict.set_label(p.verdict.label);
        self.verdict.set_color(severity_color(severity));
        self.verdict.set_label_color(severity_label_color(severity));

        self.confidence.set_label(&format!("Confidence: {}", p.confidence_label()));

        match &p.explanation {
            Some(text) => {
                self.explanation.set_label(&escape_label(text));
                self.explanation.show();
                self.group.fixed(&self.explanation, 50);
            }
            None => {
                self.explanation.hide();
                self.group.fixed(&self.explanation, 0);
            }
        }
        match &p.suggestion {
            Some(text) => {
                self.suggestion.set_label(&escape_label(&format!("Suggestion: {}", text)));
                self.suggestion.show();
                self.group.fixed(&self.suggestion, 40);
            }
            None => {
                self.suggestion.hide();
                self.group.fixed(&self.suggestion, 0);
            }
        }

        self.factors.clear();
        for row in &p.factors {
            let color = factor_text_color(row.severity);
            self.factors.add(&format!("@C{}@.{}", color.bits(), row.text));
        }

        self.news.clear();
        self.news_links.borrow_mut().clear();
        if let Some(items) = &p.related_news {
            for item in items {
                let title = if item.title.is_empty() { &item.url } else { &item.title };
                self.news.add(&format!("@.{} ({})", title, item.source));
                self.news_links.borrow_mut().push(item.url.clone());
            }
        }

        self.tools.clear();
        self.tool_links.borrow_mut().clear();
        if let Some(tools) = &p.verification_tools {
            for tool in tools {
                self.tools.add(&format!("@.{}", tool.source));
                self.tool_links.borrow_mut().push(tool.url.clone());
            }
        }

        let has_news = p.related_news.is_some();
        let has_tools = p.verification_tools.is_some();
        if has_news { self.news.show() } else { self.news.hide() }
        if has_tools { self.tools.show() } else { self.tools.hide() }
        if has_news || has_tools {
            self.links_row.show();
            self.group.fixed(&self.links_row, LINKS_HEIGHT);
        } else {
            self.links_row.hide();
            self.group.fixed(&self.links_row, 0);
        }

        self.group.show();
        self.group.redraw();
    }
}
