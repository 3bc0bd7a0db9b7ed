// Author: Dustin Pilgrim
// License: MIT

use crate::core::{
    action::{Action, TimeRecord},
    error::{Error, InputError},
    events::Event,
    state::State,
    timefmt::format_hms,
};

use super::Manager;

impl Manager {
    pub fn handle_event(&mut self, state: &mut State, event: Event) -> Result<Vec<Action>, Error> {
        let mut out = Vec::new();

        match event {
            Event::Tick { epoch } => {
                state.tick(epoch);
            }

            Event::Start => {
                if state.start() {
                    out.push(Action::notify("Timer started"));
                } else {
                    out.push(Action::notify("Timer already running"));
                }
            }

            Event::Pause => {
                if state.pause() {
                    out.push(Action::notify(format!(
                        "Timer paused at {}",
                        format_hms(state.elapsed_seconds())
                    )));
                } else {
                    out.push(Action::notify("Timer already paused"));
                }
            }

            Event::Toggle => {
                let event = if state.is_running() { Event::Pause } else { Event::Start };
                return self.handle_event(state, event);
            }

            Event::StopAndSave { at } => {
                state.pause();
                state.set_last_session(at);

                // The counter is not reset; the next run continues from here.
                let time = format_hms(state.elapsed_seconds());
                out.push(self.save(state, time));
            }

            Event::AddTime { text } => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(Error::InvalidInput(InputError::EmptyManualTime));
                }

                out.push(self.save(state, text.to_string()));
            }

            Event::SubmitLessonLink { link } => {
                let link = link.trim().to_string();
                out.push(Action::notify(format!("Lesson Link Submitted: {link}")));
                state.set_lesson_link(link);
            }

            Event::SetCourse { title } => {
                let title = match title {
                    Some(t) => {
                        let t = t.trim();
                        if t.is_empty() {
                            return Err(Error::InvalidInput(InputError::EmptyCourseTitle));
                        }
                        t.to_string()
                    }
                    None => self.default_course.clone(),
                };

                out.push(Action::notify(format!("Course set: {title}")));
                state.set_course_title(title);
            }

            Event::SaveFinished { time, result } => {
                state.save_finished();

                match result {
                    Ok(_) => out.push(Action::notify(format!(
                        "Time \"{time}\" saved successfully!"
                    ))),
                    Err(_) => out.push(Action::notify_failure("Failed to save time!")),
                }
            }
        }

        Ok(out)
    }

    fn save(&self, state: &mut State, time: String) -> Action {
        state.save_started();

        Action::SaveTime {
            record: TimeRecord {
                course_name: state.course_title().to_string(),
                time_recorded: time,
            },
        }
    }
}
