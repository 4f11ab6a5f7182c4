//! Purchase receipt template
//!
//! Sent after a marketplace purchase is recorded. Slots: `RESOURCE_NAME`,
//! `RESOURCE_NAME_LOWER`, `RESOURCE_PURCHASE_PRICE`, `RESOURCE_MARKETPLACE`,
//! `RESOURCE_TRANSACTION_ID`, `RESOURCE_TRANSACTION_TIME`.

use crate::document::{Document, Node, Style};

pub(crate) fn document() -> Document {
    Document {
        meta: &[
            ("color-scheme", "dark"),
            ("supported-color-schemes", "dark"),
        ],
        preview: "Your purchase receipt for %%_RESOURCE_NAME_%%!",
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
                            Node::text(INTRO, vec![Node::run("Thanks for your purchase!")]),
                            Node::text(
                                PARAGRAPH,
                                vec![
                                    Node::run("You'll find a copy of your receipt below. "),
                                    Node::link_new_tab(
                                        "https://william278.net/account",
                                        ANCHOR,
                                        vec![Node::run("Sign in")],
                                    ),
                                    Node::run(" to download your resource and begin using it!"),
                                ],
                            ),
                            Node::row(
                                RECEIPT_CONTAINER,
                                vec![
                                    Node::column(
                                        Some("160px"),
                                        &[],
                                        vec![Node::image_alt(
                                            "https://thread-assets.william278.net/%%_RESOURCE_NAME_LOWER_%%_icon.png",
                                            "140px",
                                            "140px",
                                            "Square %%_RESOURCE_NAME_%% icon",
                                            &[],
                                        )],
                                    ),
                                    Node::column(
                                        None,
                                        RECEIPT_DETAILS,
                                        vec![
                                            Node::text(
                                                RECEIPT_RESOURCE_NAME,
                                                vec![Node::strong(vec![Node::run(
                                                    "%%_RESOURCE_NAME_%%",
                                                )])],
                                            ),
                                            Node::text(
                                                RECEIPT_LINE,
                                                vec![Node::run("Price: %%_RESOURCE_PURCHASE_PRICE_%%")],
                                            ),
                                            Node::text(
                                                RECEIPT_LINE,
                                                vec![Node::run(
                                                    "Marketplace: %%_RESOURCE_MARKETPLACE_%%",
                                                )],
                                            ),
                                            Node::text(
                                                RECEIPT_LINE,
                                                vec![Node::run("ID: %%_RESOURCE_TRANSACTION_ID_%%")],
                                            ),
                                            Node::text(
                                                RECEIPT_LINE,
                                                vec![Node::run(
                                                    "Time: %%_RESOURCE_TRANSACTION_TIME_%%",
                                                )],
                                            ),
                                        ],
                                    ),
                                ],
                            ),
                            Node::text(
                                PARAGRAPH,
                                vec![Node::run(
                                    "Sign in to William278.net using your Discord account and \
                                     verify your email address to manage your library and \
                                     download the version of your purchased resource you need.",
                                )],
                            ),
                            Node::container(
                                BUTTON_CONTAINER,
                                vec![Node::button(
                                    "https://william278.net/account",
                                    BUTTON,
                                    vec![Node::span(
                                        BUTTON_TEXT,
                                        vec![
                                            Node::span(
                                                &[],
                                                vec![Node::image(
                                                    "https://thread-assets.william278.net/email_icon_key_green.png",
                                                    "24px",
                                                    "24px",
                                                    BUTTON_ICON,
                                                )],
                                            ),
                                            Node::span(
                                                &[],
                                                vec![Node::run("Sign in to William278.net")],
                                            ),
                                        ],
                                    )],
                                )],
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
    ("padding", "24px 0"),
];

const CONTAINER: Style = &[
    ("background-color", "#333"),
    ("margin", "0 auto"),
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

const BUTTON_CONTAINER: Style = &[
    ("align-items", "center"),
    ("justify-content", "center"),
    ("text-align", "center"),
    ("margin", "20px auto"),
];

const RECEIPT_CONTAINER: Style = &[
    ("padding", "14px"),
    ("background", "#191919"),
    ("border-radius", "10px"),
];

const RECEIPT_DETAILS: Style = &[];

const RECEIPT_RESOURCE_NAME: Style = &[
    ("margin", "0"),
    ("margin-bottom", "4px"),
    ("font-size", "20px"),
    ("line-height", "24px"),
];

const RECEIPT_LINE: Style = &[
    ("margin", "0"),
    ("color", "#818181"),
    ("font-family", "Consolas,Courier New,monospace"),
];

const BUTTON: Style = &[
    ("background-color", "none"),
    ("border", "3px solid #00fb9a"),
    ("font-size", "18px"),
    ("line-height", "26px"),
    ("color", "#00fb9a"),
    ("padding", "10px 20px 6px 20px"),
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
    ("padding-top", "8px"),
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

const ANCHOR: Style = &[("color", "#00fb9a")];

const FOOTER_ANCHOR: Style = &[
    ("font-size", "16px"),
    ("color", "#00fb9a"),
    ("margin", "0 6px"),
];
