use super::*;

#[test]
fn move_request_keeps_board_coordinates() {
    assert_eq!(MoveRequest::new(2, 0), MoveRequest { row: 2, col: 0 });
}

#[test]
fn oversized_coordinates_saturate_instead_of_wrapping() {
    let request = MoveRequest::new(usize::MAX, 1);
    assert_eq!(request.row, i64::MAX);
    assert_eq!(request.col, 1);

    let json = serde_json::to_value(request).expect("json");
    assert_eq!(json, serde_json::json!({ "row": i64::MAX, "col": 1 }));
}
