//! Email verification template
//!
//! Slots: `USERNAME`, `VERIFY_URL`, `VERIFY_CODE`.

use crate::document::{Document, Node, Style};

pub(crate) fn document() -> Document {
    Document {
        meta: &[
            ("color-scheme", "dark"),
            ("supported-color-schemes", "dark"),
        ],
        preview: "Verify your William278.net email, @%%_USERNAME_%%.",
        body_style: MAIN,
        children: vec![
            Node::container(
                CONTAINER,
                vec![
                    Node::container(
                        TITLE,
                        vec![Node::image(
                            "https://thread-assets.william278.net/william278_icon_transparent_small.png",
                            "90px",
                            "90px",
                            TITLE_ICON,
                        )],
                    ),
                    Node::container(
                        BODY,
                        vec![
                            Node::text(
                                INTRO,
                                vec![
                                    Node::run("Verify your email, "),
                                    Node::strong(vec![Node::run("@%%_USERNAME_%%")]),
                                ],
                            ),
                            Node::text(
                                PARAGRAPH,
                                vec![Node::run(
                                    "Nearly there! Click the link below to verify your email. \
                                     Purchases made using this email will then be automatically \
                                     imported to your profile.",
                                )],
                            ),
                            Node::container(
                                VERIFICATION,
                                vec![
                                    Node::button(
                                        "%%_VERIFY_URL_%%",
                                        BUTTON,
                                        vec![Node::span(
                                            BUTTON_TEXT,
                                            vec![
                                                Node::span(
                                                    &[],
                                                    vec![Node::image(
                                                        "https://thread-assets.william278.net/email_icon_envelope_green.png",
                                                        "24px",
                                                        "24px",
                                                        BUTTON_ICON,
                                                    )],
                                                ),
                                                Node::span(
                                                    &[],
                                                    vec![Node::run("Verify your email")],
                                                ),
                                            ],
                                        )],
                                    ),
                                    Node::text(VERIFY_DIVIDER, vec![Node::run("or enter code:")]),
                                    Node::text(VERIFY_CODE, vec![Node::run("%%_VERIFY_CODE_%%")]),
                                ],
                            ),
                            Node::text(
                                PARAGRAPH,
                                vec![Node::run(
                                    "If you need help with managing your account, don't \
                                     hesitate to reach out on Discord for support.",
                                )],
                            ),
                            Node::text(PARAGRAPH, vec![Node::run("— William278.net")]),
                        ],
                    ),
                ],
            ),
            Node::container(
                FOOTER,
                vec![
                    Node::text(
                        FOOTER_COPYRIGHT,
                        vec![Node::run("&copy; William278, 2024")],
                    ),
                    Node::container(
                        FOOTER_LINKS,
                        vec![
                            Node::link(
                                "https://william278.net/terms#terms-and-conditions",
                                FOOTER_ANCHOR,
                                vec![Node::run("Terms")],
                            ),
                            Node::run("&ndash;"),
                            Node::link(
                                "https://william278.net/terms#privacy-notice",
                                FOOTER_ANCHOR,
                                vec![Node::run("Privacy")],
                            ),
                            Node::run("&ndash;"),
                            Node::link(
                                "https://status.william278.net/",
                                FOOTER_ANCHOR,
                                vec![Node::run("Status")],
                            ),
                            Node::run("&ndash;"),
                            Node::link(
                                "https://william278.net/account",
                                FOOTER_ANCHOR,
                                vec![Node::run("Account")],
                            ),
                        ],
                    ),
                ],
            ),
        ],
    }
}

const MAIN: Style = &[
    ("color", "#f5f5f5"),
    ("background-color", "#222"),
    (
        "font-family",
        "-apple-system,BlinkMacSystemFont,\"Segue UI\",sans-serif",
    ),
    ("padding", "0 32px 0"),
];

const CONTAINER: Style = &[
    ("background-color", "#333"),
    ("margin", "16px auto"),
    ("padding", "0"),
    ("border-radius", "10px"),
    ("box-shadow", "0 0 0.75rem rgba(0, 0, 0, 0.1)"),
];

const BODY: Style = &[("padding", "15px 30px")];

const TITLE: Style = &[
    ("justify-content", "center"),
    ("align-items", "center"),
    ("width", "100%"),
    ("height", "130px"),
    (
        "background",
        "linear-gradient(180deg, rgba(18,39,60,1) 0%, rgba(8,17,27,1) 100%)",
    ),
    ("border-radius", "10px 10px 0 0"),
];

const TITLE_ICON: Style = &[
    ("text-align", "center"),
    ("margin", "0 auto"),
    ("padding", "0 auto"),
    ("width", "90px"),
    ("height", "90px"),
];

const INTRO: Style = &[
    ("font-size", "24px"),
    ("line-height", "36px"),
    ("font-weight", "bold"),
    ("text-align", "left"),
];

const PARAGRAPH: Style = &[
    ("font-size", "16px"),
    ("line-height", "24px"),
    ("text-align", "left"),
];

const VERIFICATION: Style = &[
    ("align-items", "center"),
    ("justify-content", "center"),
    ("text-align", "center"),
    ("margin", "40px auto"),
];

const VERIFY_CODE: Style = &[
    ("color", "#818181"),
    ("font-family", "Consolas,Courier New,monospace"),
    ("font-size", "26px"),
    ("line-height", "20px"),
    ("font-weight", "bold"),
    ("background-color", "#191919"),
    ("padding", "20px"),
    ("margin", "0 auto"),
    ("border-radius", "10px"),
    ("max-width", "250px"),
];

const VERIFY_DIVIDER: Style = &[("color", "#818181")];

const BUTTON: Style = &[
    ("background-color", "#00fb9a11"),
    ("box-shadow", "#00fb9a33 0 0 70px"),
    ("border", "3px solid #00fb9a"),
    ("font-size", "18px"),
    ("line-height", "26px"),
    ("color", "#00fb9a"),
    ("padding", "12px 20px 8px 20px"),
    ("border-radius", "50px"),
    ("font-weight", "bold"),
    ("text-align", "center"),
];

const BUTTON_TEXT: Style = &[
    ("display", "flex"),
    ("justify-content", "center"),
    ("align-items", "center"),
];

const BUTTON_ICON: Style = &[
    ("padding-right", "10px"),
    ("font-size", "24px"),
    ("line-height", "26px"),
];

const FOOTER: Style = &[
    ("justify-content", "center"),
    ("align-items", "center"),
    ("text-align", "center"),
    ("color", "#818181"),
    ("margin", "0 auto"),
];

const FOOTER_LINKS: Style = &[
    ("margin", "0 auto"),
    ("padding", "0 auto"),
    ("text-align", "center"),
    ("justify-content", "center"),
    ("align-items", "center"),
];

const FOOTER_COPYRIGHT: Style = &[("font-size", "16px"), ("margin", "2px 0")];

const FOOTER_ANCHOR: Style = &[("color", "#00fb9a"), ("margin", "0 6px")];
