//! Сквозные сценарии: мастер создания события от черновика до тела запроса,
//! плюс публичный выбор мест по той же схеме.

use tickit_editor::config::{Config, SelectorSettings};
use tickit_editor::design::{SmartTagContext, StyleUpdate, TicketDesignEditor};
use tickit_editor::error::EditorError;
use tickit_editor::geometry::{Point, Rect};
use tickit_editor::models::{ElementType, SeatDto, SeatKey, TextAlign, TicketTier};
use tickit_editor::seat_map::{PointerButton, PointerTarget, ResizeHandle, SeatMapEditor, Tool};
use tickit_editor::services::{BuyerInfo, EventDraft, PublicSeatSelector, SeatState, Toggle};
use tickit_editor::EditorSession;

const DRAFT: &str = r##"{
    "title": "Autumn Gala",
    "eventDate": "2026-11-20",
    "venueName": "Heydar Aliyev Center",
    "isReservedSeating": true,
    "tiers": [
        {"id": "vip", "name": "VIP", "price": 120, "quantity": 3, "color": "#d4af37"},
        {"id": "std", "name": "Standard", "price": 40, "quantity": 4, "color": "#3b82f6"}
    ],
    "buyerQuestions": [{"id": "q1", "label": "Company", "required": true}]
}"##;

fn container() -> Option<Rect> {
    Some(Rect::new(0.0, 0.0, 640.0, 480.0))
}

/// Экранная точка центра ячейки при текущей камере
fn screen_of(editor: &SeatMapEditor, key: SeatKey) -> Point {
    editor.viewport().grid_to_screen(key, editor.container()).unwrap()
}

#[test]
fn draft_with_capacity_seven_generates_grid() {
    let draft: EventDraft = serde_json::from_str(DRAFT).unwrap();
    let session = EditorSession::from_draft(Config::default(), draft).unwrap();
    let grid = session.seat_map.grid();

    assert_eq!(grid.len(), 7);
    assert_eq!(session.seat_map.inputs().cols, 4);
    assert_eq!(session.seat_map.inputs().rows, 2);

    let keys: Vec<SeatKey> = grid.keys().collect();
    assert_eq!(keys.first(), Some(&SeatKey::new(-1, -2)));
    // восьмая ячейка (0, 1) отрезана
    assert!(!grid.contains(SeatKey::new(0, 1)));
    assert!(grid.contains(SeatKey::new(0, 0)));

    let stage = &session.seat_map.config().stages[0];
    assert_eq!((stage.x, stage.y, stage.w, stage.h), (-100.0, -112.0, 200.0, 50.0));
}

#[test]
fn paint_tiers_and_submit() {
    let draft: EventDraft = serde_json::from_str(DRAFT).unwrap();
    let mut session = EditorSession::from_draft(Config::default(), draft).unwrap();
    session.seat_map.set_container(container());

    // пока нет категорий у мест - отправлять нечего
    assert!(session.payload().unwrap().seats.is_empty());

    assert!(session.seat_map.set_tool(Tool::Tier("vip".into())));
    let from = screen_of(&session.seat_map, SeatKey::new(-1, -2));
    let to = screen_of(&session.seat_map, SeatKey::new(-1, 1));
    session.seat_map.pointer_down(PointerTarget::Canvas, PointerButton::Primary, from);
    for step in 1..=12 {
        let t = f64::from(step) / 12.0;
        session
            .seat_map
            .pointer_move(Point::new(from.x + (to.x - from.x) * t, from.y));
    }
    session.seat_map.pointer_up();

    let payload = session.payload().unwrap();
    assert_eq!(payload.seats.len(), 4);
    assert!(payload.seats.iter().all(|seat| seat.tier_id == "vip" && seat.row == -1));

    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["seats"][0]["tierId"], "vip");
    assert_eq!(json["ticketDesign"]["elements"][0]["type"], "qr");
}

#[test]
fn stage_drag_and_resize_follow_zoom() {
    let mut editor = SeatMapEditor::new(&Config::default().seat_map);
    editor.set_container(container());
    editor.viewport_mut().set_zoom(2.0);
    let id = editor.config().stages[0].id.clone();

    editor.pointer_down(PointerTarget::StageBody(id.clone()), PointerButton::Primary, Point::new(100.0, 100.0));
    editor.pointer_move(Point::new(140.0, 120.0));
    editor.pointer_leave();
    let stage = editor.config().stage(&id).unwrap().clone();
    assert_eq!((stage.x, stage.y), (-80.0, -140.0));

    editor.pointer_down(PointerTarget::StageHandle(id.clone(), ResizeHandle::Se), PointerButton::Primary, Point::ZERO);
    editor.pointer_move(Point::new(-1000.0, 40.0));
    editor.pointer_up();
    let stage = editor.config().stage(&id).unwrap();
    assert_eq!((stage.w, stage.h), (60.0, 70.0));
    assert!(editor.gesture().is_idle());
}

#[test]
fn only_qr_survives_delete_attempts() {
    let mut editor = TicketDesignEditor::default();
    let before = editor.design().elements.len();

    editor.select("qr-1").unwrap();
    assert_eq!(editor.delete_selected(), Err(EditorError::QrRequired));
    assert_eq!(editor.design().elements.len(), before);
    assert_eq!(editor.design().qr_count(), 1);
    assert_eq!(EditorError::QrRequired.to_string(), "QR Code is required!");
}

#[test]
fn center_alignment_ignores_prior_geometry() {
    let mut editor = TicketDesignEditor::default();
    for template in ["minimalDark", "goldVip", "milliAz", "corporateBlue"] {
        editor.apply_template(template).unwrap();
        let ids: Vec<String> = editor
            .design()
            .elements
            .iter()
            .filter(|el| el.kind == ElementType::Text)
            .map(|el| el.id.clone())
            .collect();

        for id in ids {
            editor.update_element_style(&id, StyleUpdate::align(TextAlign::Center)).unwrap();
            let el = editor.design().element(&id).unwrap();
            assert_eq!((el.x, el.width), (0.0, Some(360.0)));
        }
    }
}

#[test]
fn resize_gesture_from_twenty_by_twenty_five() {
    let mut editor = TicketDesignEditor::default();
    let id = editor.add_element(ElementType::Text, "{{Guest_Name}}").unwrap();
    editor
        .update_style(StyleUpdate {
            font_size: Some(20.0),
            ..Default::default()
        })
        .unwrap();

    editor.begin_resize(&id, Point::new(200.0, 310.0)).unwrap();
    editor.pointer_move(Point::new(225.0, 500.0));
    editor.pointer_up();
    assert_eq!(editor.design().element(&id).unwrap().font_size, 40.0);
}

#[test]
fn preview_renders_draft_details() {
    let draft: EventDraft = serde_json::from_str(DRAFT).unwrap();
    let session = EditorSession::from_draft(Config::default(), draft).unwrap();
    let ctx: SmartTagContext = session.preview_context();

    assert_eq!(
        ctx.render("{{Event_Name}} | {{Event_Date}} | {{Location}} | {{Company}} | {{Shoe_Size}}"),
        "Autumn Gala | 20.11.2026 | Heydar Aliyev Center | Sample Company | {{Shoe_Size}}"
    );
}

fn public_selector(max: usize) -> PublicSeatSelector {
    let draft: EventDraft = serde_json::from_str(DRAFT).unwrap();
    let mut session = EditorSession::from_draft(Config::default(), draft).unwrap();
    session.seat_map.set_container(container());
    session.seat_map.set_tool(Tool::Tier("std".into()));
    for key in session.seat_map.grid().keys().collect::<Vec<_>>() {
        session.seat_map.apply_tool(key);
    }
    let payload = session.payload().unwrap();
    let tiers: Vec<TicketTier> = session.seat_map.tiers().to_vec();

    PublicSeatSelector::new(
        "evt-gala",
        &payload.seats,
        tiers,
        &["0_0".to_string()],
        &SelectorSettings {
            max_tickets_per_order: max,
        },
    )
}

#[test]
fn eleventh_seat_is_rejected_at_default_limit() {
    let seats: Vec<SeatDto> = (0..3)
        .flat_map(|row| {
            (0..4).map(move |col| SeatDto {
                row,
                col,
                tier_id: "std".into(),
            })
        })
        .collect();
    let tiers = vec![TicketTier::new("std", "Standard", 40.0, 12, "#3b82f6")];
    let mut selector = PublicSeatSelector::new("evt-hall", &seats, tiers, &[], &SelectorSettings::default());

    for seat in &seats[..10] {
        assert_eq!(selector.toggle_seat(seat.key()), Ok(Toggle::Added));
    }
    let before = selector.selected().to_vec();

    assert_eq!(
        selector.toggle_seat(seats[10].key()),
        Err(EditorError::SelectionLimit { max: 10 })
    );
    assert_eq!(selector.selected(), before.as_slice());
    assert!(selector.take_notice().is_some());
    assert_eq!(selector.total_price(), 400.0);
}

#[test]
fn sold_seat_from_editor_payload_is_blocked() {
    let mut selector = public_selector(10);
    let sold = SeatKey::new(0, 0);
    assert_eq!(selector.toggle_seat(sold), Err(EditorError::SeatSold(sold)));
    assert_eq!(selector.seat_state(sold), Some(SeatState::Sold));
    assert!(selector.selected().is_empty());

    selector.toggle_seat(SeatKey::new(-1, -2)).unwrap();
    assert_eq!(selector.total_price(), 40.0);
    assert_eq!(selector.row_labels().get(&0).map(String::as_str), Some("B"));
}

#[test]
fn toggle_twice_restores_selection() {
    let mut selector = public_selector(10);
    selector.toggle_seat(SeatKey::new(-1, 0)).unwrap();
    let before = selector.selected().to_vec();

    let key = SeatKey::parse("-1_1").unwrap();
    selector.toggle_seat(key).unwrap();
    selector.toggle_seat(key).unwrap();
    assert_eq!(selector.selected(), before.as_slice());

    let buyer = BuyerInfo {
        first_name: "Leyla".into(),
        last_name: "Aliyeva".into(),
        email: "leyla@example.az".into(),
        phone: Some("+994501234567".into()),
    };
    let order = selector.order_request(&buyer).unwrap();
    assert_eq!(order.seat_ids, vec!["-1_0"]);
    assert_eq!(order.customer_phone.as_deref(), Some("+994501234567"));
}
