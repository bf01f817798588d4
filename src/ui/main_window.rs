use fltk::{
    app::Sender,
    button::{Button, RadioRoundButton},
    enums::{Align, CallbackTrigger, Font, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    input::{Input, MultilineInput},
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use super::result_panel::ResultPanel;
use super::theme::muted_text_color;
use crate::app::domain::input::InputMode;
use crate::app::domain::messages::Message;

pub const WINDOW_TITLE: &str = "FactCheck";

pub struct ModeButtons {
    pub text: RadioRoundButton,
    pub url: RadioRoundButton,
    pub image: RadioRoundButton,
}

impl ModeButtons {
    pub fn select(&mut self, mode: InputMode) {
        self.text.set_value(mode == InputMode::Text);
        self.url.set_value(mode == InputMode::Url);
        self.image.set_value(mode == InputMode::Image);
    }
}

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub modes: ModeButtons,
    pub prompt: Frame,
    pub text_input: MultilineInput,
    pub url_input: Input,
    pub image_row: Flex,
    pub image_label: Frame,
    pub clear_image_btn: Button,
    pub analyze_btn: Button,
    pub status_frame: Frame,
    pub result: ResultPanel,
}

fn mode_button(mode: InputMode, sender: &Sender<Message>) -> RadioRoundButton {
    let mut btn = RadioRoundButton::default().with_label(mode.display_name());
    let s = *sender;
    btn.set_callback(move |_| s.send(Message::SetMode(mode)));
    btn
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 760, 780, WINDOW_TITLE);
    wind.set_xclass("FactCheck");

    let mut flex = Flex::new(0, 0, 760, 780, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let mut body = Flex::default();
    body.set_type(FlexType::Column);
    body.set_margin(15);
    body.set_spacing(8);

    let mut title = Frame::default().with_label("Check a claim before you share it");
    title.set_label_size(18);
    title.set_label_font(Font::HelveticaBold);
    title.set_align(Align::Left | Align::Inside);
    body.fixed(&title, 30);

    let mut mode_row = Flex::default();
    mode_row.set_type(FlexType::Row);
    let text_btn = mode_button(InputMode::Text, sender);
    let url_btn = mode_button(InputMode::Url, sender);
    let image_btn = mode_button(InputMode::Image, sender);
    let _spacer = Frame::default();
    mode_row.end();
    body.fixed(&mode_row, 30);

    let mut prompt = Frame::default();
    prompt.set_label_color(muted_text_color());
    prompt.set_align(Align::Left | Align::Inside);
    body.fixed(&prompt, 20);

    let mut text_input = MultilineInput::default();
    text_input.set_trigger(CallbackTrigger::Changed);
    {
        let s = *sender;
        text_input.set_callback(move |i| s.send(Message::TextChanged(i.value())));
    }
    body.fixed(&text_input, 120);

    let mut url_input = Input::default();
    url_input.set_trigger(CallbackTrigger::Changed);
    {
        let s = *sender;
        url_input.set_callback(move |i| s.send(Message::UrlChanged(i.value())));
    }
    body.fixed(&url_input, 30);

    let mut image_row = Flex::default();
    image_row.set_type(FlexType::Row);
    image_row.set_spacing(8);
    let mut choose_btn = Button::default().with_label("Choose Image...");
    {
        let s = *sender;
        choose_btn.set_callback(move |_| s.send(Message::ChooseImage));
    }
    image_row.fixed(&choose_btn, 140);
    let mut image_label = Frame::default();
    image_label.set_frame(FrameType::DownBox);
    image_label.set_align(Align::Left | Align::Inside | Align::Clip);
    let mut clear_image_btn = Button::default().with_label("Remove");
    {
        let s = *sender;
        clear_image_btn.set_callback(move |_| s.send(Message::ClearImage));
    }
    image_row.fixed(&clear_image_btn, 90);
    image_row.end();
    body.fixed(&image_row, 32);

    let mut action_row = Flex::default();
    action_row.set_type(FlexType::Row);
    let _spacer = Frame::default();
    let mut analyze_btn = Button::default().with_label("Analyze");
    analyze_btn.set_label_font(Font::HelveticaBold);
    {
        let s = *sender;
        analyze_btn.set_callback(move |_| s.send(Message::Submit));
    }
    action_row.fixed(&analyze_btn, 160);
    action_row.end();
    body.fixed(&action_row, 36);

    let mut status_frame = Frame::default();
    status_frame.set_align(Align::Left | Align::Inside | Align::Wrap);
    status_frame.set_label_size(13);
    body.fixed(&status_frame, 36);

    let result = ResultPanel::new(sender);

    body.end();
    flex.end();
    wind.resizable(&flex);
    wind.end();

    let mut modes = ModeButtons {
        text: text_btn,
        url: url_btn,
        image: image_btn,
    };
    modes.select(InputMode::default());

    MainWidgets {
        wind,
        flex,
        menu,
        modes,
        prompt,
        text_input,
        url_input,
        image_row,
        image_label,
        clear_image_btn,
        analyze_btn,
        status_frame,
        result,
    }
}
