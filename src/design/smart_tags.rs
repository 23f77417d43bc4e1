//! Смарт-теги `{{Token}}` в тексте билета. Подстановка только для показа,
//! в дизайне хранится исходный текст с тегами.

use chrono::NaiveDate;

use crate::models::BuyerQuestion;

pub const EVENT_NAME: &str = "{{Event_Name}}";
pub const EVENT_DATE: &str = "{{Event_Date}}";
pub const LOCATION: &str = "{{Location}}";
pub const GUEST_NAME: &str = "{{Guest_Name}}";
pub const TICKET_TYPE: &str = "{{Ticket_Type}}";
pub const SEAT_INFO: &str = "{{Seat_Info}}";

pub const BUILTIN_TAGS: [&str; 6] = [EVENT_NAME, EVENT_DATE, LOCATION, GUEST_NAME, TICKET_TYPE, SEAT_INFO];

/// Что знает мастер о событии на шаге дизайна (поля могут быть еще пустыми)
#[derive(Debug, Clone, Default)]
pub struct EventDetails {
    pub title: String,
    pub date: Option<NaiveDate>,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SmartTagContext {
    pub event_name: String,
    pub event_date: String,
    pub location: String,
    pub guest_name: String,
    pub ticket_type: String,
    pub seat_info: String,
    /// (label вопроса, значение)
    pub answers: Vec<(String, String)>,
}

fn or_sample(value: &str, sample: &str) -> String {
    if value.trim().is_empty() {
        sample.to_string()
    } else {
        value.to_string()
    }
}

pub fn format_event_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

impl SmartTagContext {
    /// Контекст предпросмотра в редакторе: реальные данные события, где они есть,
    /// остальное - образцы
    pub fn preview(event: &EventDetails, questions: &[BuyerQuestion]) -> Self {
        Self {
            event_name: or_sample(&event.title, "My Awesome Event"),
            event_date: event
                .date
                .map(format_event_date)
                .unwrap_or_else(|| "12.12.2026".to_string()),
            location: or_sample(&event.location, "Baku, AZ"),
            guest_name: "John Doe".to_string(),
            ticket_type: "VIP".to_string(),
            seat_info: "Row 1, Seat 12".to_string(),
            answers: questions
                .iter()
                .filter(|q| !q.label.trim().is_empty())
                .map(|q| (q.label.clone(), format!("Sample {}", q.label)))
                .collect(),
        }
    }

    /// Контекст конкретного билета
    pub fn for_ticket(
        event: &EventDetails,
        guest_name: impl Into<String>,
        ticket_type: impl Into<String>,
        seat_info: Option<String>,
        answers: Vec<(String, String)>,
    ) -> Self {
        Self {
            event_name: event.title.clone(),
            event_date: event.date.map(format_event_date).unwrap_or_default(),
            location: event.location.clone(),
            guest_name: guest_name.into(),
            ticket_type: ticket_type.into(),
            seat_info: seat_info.unwrap_or_default(),
            answers,
        }
    }

    /// Буквальная замена подстрок. Неизвестные теги остаются как есть.
    pub fn render(&self, content: &str) -> String {
        let mut rendered = content
            .replace(EVENT_NAME, &self.event_name)
            .replace(EVENT_DATE, &self.event_date)
            .replace(LOCATION, &self.location)
            .replace(GUEST_NAME, &self.guest_name)
            .replace(TICKET_TYPE, &self.ticket_type)
            .replace(SEAT_INFO, &self.seat_info);

        for (label, value) in &self.answers {
            if label.trim().is_empty() {
                continue;
            }
            rendered = rendered.replace(&format!("{{{{{}}}}}", label), value);
        }
        rendered
    }
}

/// Теги для кнопок "+ Event Name" и т.д.: встроенные плюс вопросы покупателю
pub fn palette(questions: &[BuyerQuestion]) -> Vec<String> {
    BUILTIN_TAGS
        .iter()
        .map(|tag| tag.to_string())
        .chain(
            questions
                .iter()
                .filter(|q| !q.label.trim().is_empty())
                .map(|q| format!("{{{{{}}}}}", q.label)),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(label: &str) -> BuyerQuestion {
        BuyerQuestion {
            id: label.to_lowercase(),
            label: label.to_string(),
            required: false,
        }
    }

    #[test]
    fn preview_uses_samples_for_missing_details() {
        let ctx = SmartTagContext::preview(&EventDetails::default(), &[]);
        assert_eq!(
            ctx.render("{{Event_Name}} • {{Event_Date}} • {{Location}}"),
            "My Awesome Event • 12.12.2026 • Baku, AZ"
        );
        assert_eq!(ctx.render("{{Ticket_Type}} | {{Seat_Info}}"), "VIP | Row 1, Seat 12");
    }

    #[test]
    fn preview_prefers_real_event_data() {
        let event = EventDetails {
            title: "Jazz Night".into(),
            date: NaiveDate::from_ymd_opt(2026, 3, 7),
            location: "Philharmonic".into(),
        };
        let ctx = SmartTagContext::preview(&event, &[]);
        assert_eq!(ctx.render("{{Event_Name}}, {{Event_Date}}"), "Jazz Night, 07.03.2026");
    }

    #[test]
    fn custom_question_tags_are_substituted() {
        let ctx = SmartTagContext::preview(&EventDetails::default(), &[question("Company"), question("  ")]);
        assert_eq!(ctx.render("{{Guest_Name}} / {{Company}}"), "John Doe / Sample Company");
    }

    #[test]
    fn unknown_tags_stay_verbatim() {
        let ctx = SmartTagContext::preview(&EventDetails::default(), &[]);
        assert_eq!(ctx.render("Hello {{Unknown}} {{Guest_Name"), "Hello {{Unknown}} {{Guest_Name");
    }

    #[test]
    fn ticket_context_uses_purchase_data() {
        let event = EventDetails {
            title: "Derby".into(),
            date: NaiveDate::from_ymd_opt(2026, 5, 1),
            location: "Baku Olympic Stadium".into(),
        };
        let ctx = SmartTagContext::for_ticket(
            &event,
            "Rashad Aliyev",
            "Standard",
            None,
            vec![("Company".into(), "SOCAR".into())],
        );
        assert_eq!(
            ctx.render("{{Guest_Name}} ({{Company}}) {{Ticket_Type}} [{{Seat_Info}}] {{Event_Date}}"),
            "Rashad Aliyev (SOCAR) Standard [] 01.05.2026"
        );
    }

    #[test]
    fn palette_lists_builtin_and_custom_tags() {
        let tags = palette(&[question("T-Shirt Size"), question("")]);
        assert_eq!(tags.len(), 7);
        assert_eq!(tags.last().map(String::as_str), Some("{{T-Shirt Size}}"));
    }
}
