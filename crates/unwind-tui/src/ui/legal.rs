use super::ViewParams;
use ratatui::{
    prelude::{Frame, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unwind_core::{theme::Element, Screen};

type Section = (&'static str, &'static str);

const TERMS: [Section; 6] = [
    (
        "1. Acceptance of Terms",
        "By accessing and using Unwind Yoga mobile application, you accept and agree to be bound by the terms and provision of this agreement.",
    ),
    (
        "2. Description of Service",
        "Unwind Yoga provides personalized yoga and stretching routines, meditation guidance, and wellness tracking features through our mobile application.",
    ),
    (
        "3. User Responsibilities",
        "Users are responsible for consulting with healthcare professionals before beginning any exercise program. Practice at your own risk and within your physical limitations.",
    ),
    (
        "4. Intellectual Property",
        "All content, including videos, audio, text, and images, are the intellectual property of Unwind Yoga and are protected by copyright laws.",
    ),
    (
        "5. Limitation of Liability",
        "Unwind Yoga shall not be liable for any injuries or damages arising from the use of this application or following the provided exercises.",
    ),
    (
        "6. Updates to Terms",
        "We reserve the right to update these terms at any time. Users will be notified of significant changes through the application.",
    ),
];

const PRIVACY: [Section; 6] = [
    (
        "Information We Collect",
        "We collect information you provide directly to us, such as when you create an account, complete your profile, or contact us for support.",
    ),
    (
        "How We Use Your Information",
        "We use the information we collect to provide, maintain, and improve our services, personalize your experience, and communicate with you.",
    ),
    (
        "Information Sharing",
        "We do not sell, trade, or otherwise transfer your personal information to third parties without your consent, except as described in this policy.",
    ),
    (
        "Data Security",
        "We implement appropriate security measures to protect your personal information against unauthorized access, alteration, disclosure, or destruction.",
    ),
    (
        "Your Rights",
        "You have the right to access, update, or delete your personal information. You may also opt out of certain communications from us.",
    ),
    (
        "Contact Us",
        "If you have any questions about this Privacy Policy, please contact us at privacy@unwindyoga.com.",
    ),
];

/// Draws the page and returns the largest useful scroll offset for `area`.
pub fn render_legal(frame: &mut Frame, area: Rect, params: &ViewParams) -> u16 {
    let theme = params.theme;
    let (title, sections) = match params.state.screen() {
        Screen::PrivacyPolicy => (" Privacy Policy ", &PRIVACY),
        _ => (" Terms of Use ", &TERMS),
    };

    let block = Block::new()
        .title(title)
        .borders(Borders::ALL)
        .style(theme.ratatui_style(Element::Border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width.saturating_sub(2).max(20) as usize;
    let mut lines = Vec::new();
    for (heading, body) in sections.iter() {
        lines.push(Line::from(Span::styled(*heading, theme.title_style())));
        for wrapped in textwrap::wrap(body, width) {
            lines.push(Line::from(Span::styled(
                wrapped.into_owned(),
                theme.text_style(),
            )));
        }
        lines.push(Line::from(""));
    }

    let max_scroll = (lines.len() as u16).saturating_sub(inner.height);
    let paragraph = Paragraph::new(lines)
        .style(theme.text_style())
        .scroll((params.scroll.min(max_scroll), 0));
    frame.render_widget(paragraph, inner);
    max_scroll
}
