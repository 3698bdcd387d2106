use super::Scroll;

fn scroll(list_length: u16, viewport_length: u16) -> Scroll {
    let mut scroll = Scroll::default();
    scroll.set_state(list_length, viewport_length);
    return scroll;
}

#[test]
fn it_starts_at_the_bottom() {
    let scroll = scroll(50, 20);

    assert_eq!(scroll.position, 30);
    assert!(scroll.is_at_bottom());
}

#[test]
fn it_stays_at_the_top_when_content_fits() {
    let mut scroll = scroll(10, 20);
    scroll.down();

    assert_eq!(scroll.position, 0);
}

#[test]
fn it_follows_new_content_at_the_bottom() {
    let mut scroll = scroll(50, 20);
    scroll.set_state(60, 20);

    assert_eq!(scroll.position, 40);
}

#[test]
fn it_holds_position_after_scrolling_up() {
    let mut scroll = scroll(50, 20);
    scroll.up_page();
    assert_eq!(scroll.position, 20);

    scroll.set_state(60, 20);
    assert_eq!(scroll.position, 20);
    assert!(!scroll.is_at_bottom());
}

#[test]
fn it_reattaches_when_scrolled_back_down() {
    let mut scroll = scroll(50, 20);
    scroll.up();
    scroll.down();
    scroll.set_state(60, 20);

    assert_eq!(scroll.position, 40);
}

#[test]
fn it_clamps_page_movement() {
    let mut scroll = scroll(15, 10);
    scroll.up_page();
    assert_eq!(scroll.position, 0);

    scroll.down_page();
    assert_eq!(scroll.position, 5);
}
