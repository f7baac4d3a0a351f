use chrono::Datelike;
use yew::prelude::*;

use crate::content::{BRAND_INITIAL, ORGANIZATION};

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, ORGANIZATION)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-row">
                <div class="brand">
                    <div class="brand-mark brand-mark-small">
                        <span class="serif">{BRAND_INITIAL}</span>
                    </div>
                    <span class="brand-name brand-name-small serif">{ORGANIZATION}</span>
                </div>
                <div class="footer-copyright">{copyright_line(year)}</div>
                <div class="footer-links">
                    <a href="#">{"Privacy"}</a>
                    <a href="#">{"Terms"}</a>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    padding: 3rem 0;
                    border-top: 1px solid rgba(6, 78, 59, 0.5);
                }
                .footer-row {
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    align-items: center;
                    gap: 2rem;
                }
                @media (min-width: 768px) {
                    .footer-row {
                        flex-direction: row;
                    }
                }
                .brand-mark-small {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 0.25rem;
                    font-size: 0.875rem;
                }
                .brand-name-small {
                    font-size: 0.875rem;
                }
                .footer-copyright {
                    color: #78716c;
                    font-size: 0.75rem;
                }
                .footer-links {
                    display: flex;
                    gap: 1.5rem;
                }
                .footer-links a {
                    color: #78716c;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .footer-links a:hover {
                    color: #34d399;
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_year_and_organization() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 Eleimon Christ Ministries. All rights reserved."
        );
    }
}
