use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use super::App;
use super::ViewState;
use super::components::{
	InputContext, TableSpec, build_event_rows, details_height, render_details, render_input,
	render_notice, render_table,
};

impl App<'_> {
	/// Draw one frame. Pure function of state: the body renders the hint,
	/// the not-found notice, or the details panel depending on
	/// [`ViewState`], never more than one.
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		let area = area.inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(1), Constraint::Min(1)])
			.split(area);

		let input_ctx = InputContext {
			input: &self.reference_input,
			area: layout[0],
			theme: &self.style.theme,
		};
		render_input(frame, input_ctx);

		let body = layout[1];
		match self.view_state() {
			ViewState::Idle => {
				self.events_area = None;
				let hint = Paragraph::new(Span::styled(
					self.labels.hint.clone(),
					self.style.theme.empty,
				));
				frame.render_widget(hint, body);
			}
			ViewState::NotFound => {
				self.events_area = None;
				render_notice(
					frame,
					body,
					self.reference_input.text(),
					&self.style.theme,
				);
			}
			ViewState::Found => self.render_record(frame, body),
		}
	}

	fn render_record(&mut self, frame: &mut Frame, body: Rect) {
		// Fields are borrowed disjointly: the record drives the panel while
		// the table widgets need mutable selection state.
		let Some(record) = self.result.as_ref() else {
			return;
		};

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(details_height(record)),
				Constraint::Min(3),
			])
			.split(body);

		render_details(
			frame,
			layout[0],
			record,
			&self.labels.details_title,
			&self.style.theme,
		);

		let history_area = layout[1];
		self.events_area = Some(history_area);

		let spec = TableSpec {
			headers: vec!["Date".to_string(), "Event".to_string()],
			widths: vec![Constraint::Length(22), Constraint::Min(20)],
			rows: build_event_rows(&record.events, &self.style.theme),
			title: Some(self.labels.history_title.clone()),
		};

		render_table(
			frame,
			history_area,
			&mut self.events_state,
			&mut self.events_scrollbar,
			spec,
			&self.style.theme,
		);
	}
}
