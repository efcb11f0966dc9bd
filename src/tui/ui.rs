use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::navigation::Route;
use crate::core::state::CatalogState;
use crate::tui::component::Component;
use crate::tui::components::{BookList, ChapterList, Footer, TitleBar};
use crate::tui::{Focus, TuiState};

pub const HOME_TITLE: &str = "Featured Books";
pub const PDF_TITLE: &str = "PDF Books";
pub const UNICODE_TITLE: &str = "Searched Books";

const HOME_HINTS: &str = " Tab Focus  Enter Open  ^R Reload  Esc Quit ";
const DETAIL_HINTS: &str = " Esc Back ";

pub fn draw_ui(frame: &mut Frame, state: &CatalogState, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, footer_area] = layout.areas(frame.area());

    TitleBar::new(HOME_TITLE, state.status_message.as_str()).render(frame, title_area);

    let hints = match state.navigator.current() {
        Route::Home => {
            draw_home(frame, main_area, state, tui);
            HOME_HINTS
        }
        Route::ChapterList(params) => {
            ChapterList::new(params).render(frame, main_area);
            DETAIL_HINTS
        }
    };

    Footer::new(hints).render(frame, footer_area);
}

fn draw_home(frame: &mut Frame, area: ratatui::layout::Rect, state: &CatalogState, tui: &mut TuiState) {
    use Constraint::{Length, Percentage};
    let [search_area, pdf_area, unicode_area] =
        Layout::vertical([Length(3), Percentage(50), Percentage(50)]).areas(area);

    tui.search_box.focused = tui.focus == Focus::Search;
    tui.search_box.render(frame, search_area);

    BookList::new(
        PDF_TITLE,
        &state.pdf_books,
        &state.status,
        tui.focus == Focus::PdfList,
        &mut tui.pdf_list,
    )
    .render(frame, pdf_area);

    BookList::new(
        UNICODE_TITLE,
        &state.unicode_books,
        &state.status,
        tui.focus == Focus::UnicodeList,
        &mut tui.unicode_list,
    )
    .render(frame, unicode_area);
}
