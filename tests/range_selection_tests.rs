use approx::assert_relative_eq;
use dashboard_rs::core::{ValueRange, YearRange};
use dashboard_rs::interaction::{
    CommitSource, DragTarget, RangeInteractionMode, RangeQuantization, RangeSelectionController,
};

fn year_slider() -> RangeSelectionController {
    // 2000..=2020 over 400px: 20px per year.
    RangeSelectionController::for_years(YearRange::new(2000, 2020), 400.0).expect("slider init")
}

#[test]
fn inverted_text_input_is_swapped_not_rejected() {
    let mut slider = RangeSelectionController::for_years(YearRange::new(2000, 2025), 500.0)
        .expect("slider init");
    let commit = slider.commit_text(2020.0, 2010.0).expect("commit");
    assert_eq!(commit.source, CommitSource::Text);
    assert_eq!(commit.year_range(), YearRange::new(2010, 2020));

    let text = slider.text_fields();
    assert_relative_eq!(text.lower, 2010.0);
    assert_relative_eq!(text.upper, 2020.0);
}

#[test]
fn text_input_is_clamped_to_domain() {
    let mut slider = year_slider();
    let commit = slider.commit_text(1980.0, 2050.0).expect("commit");
    assert_eq!(commit.year_range(), YearRange::new(2000, 2020));
}

#[test]
fn text_commit_moves_handles_immediately() {
    let mut slider = year_slider();
    slider.commit_text(2005.0, 2010.0).expect("commit");
    let handles = slider.handle_positions();
    assert_relative_eq!(handles.lower_px, 100.0);
    assert_relative_eq!(handles.upper_px, 200.0);
    assert_relative_eq!(handles.selection_width_px(), 100.0);
}

#[test]
fn single_field_commits_keep_the_other_bound() {
    let mut slider = year_slider();
    slider.commit_text_lower(2004.0).expect("lower");
    let commit = slider.commit_text_upper(2001.0).expect("upper");
    assert_eq!(commit.year_range(), YearRange::new(2001, 2004));
}

#[test]
fn drag_previews_live_and_commits_on_release() {
    let mut slider = year_slider();
    assert_eq!(slider.pointer_down(2.0), DragTarget::Lower);
    assert_eq!(slider.mode(), RangeInteractionMode::Dragging);

    let preview = slider.pointer_move(101.0).expect("preview");
    assert_relative_eq!(preview.min(), 2005.05, epsilon = 1e-9);
    // Text fields still show the committed interval mid-drag.
    assert_relative_eq!(slider.text_fields().lower, 2000.0);
    assert_eq!(slider.committed().to_year_range(), YearRange::new(2000, 2020));

    let commit = slider.pointer_up().expect("commit");
    assert_eq!(commit.source, CommitSource::Drag);
    assert_eq!(commit.year_range(), YearRange::new(2005, 2020));
    assert_eq!(slider.mode(), RangeInteractionMode::Idle);
    assert_relative_eq!(slider.text_fields().lower, 2005.0);
    // Handle snaps onto the committed year.
    assert_relative_eq!(slider.handle_positions().lower_px, 100.0);
}

#[test]
fn upper_handle_clamps_at_lower_handle() {
    let mut slider = year_slider();
    slider.commit_text(2010.0, 2015.0).expect("commit");
    assert_eq!(slider.pointer_down(300.0), DragTarget::Upper);
    slider.pointer_move(-50.0);
    let commit = slider.pointer_up().expect("commit");
    assert_eq!(commit.year_range(), YearRange::new(2010, 2010));
}

#[test]
fn cancel_restores_committed_visuals() {
    let mut slider = year_slider();
    slider.pointer_down(0.0);
    slider.pointer_move(250.0);
    slider.cancel_drag();
    assert_eq!(slider.mode(), RangeInteractionMode::Idle);
    assert_relative_eq!(slider.handle_positions().lower_px, 0.0);
    assert!(slider.pointer_up().is_none());
}

#[test]
fn text_commit_abandons_in_flight_drag() {
    let mut slider = year_slider();
    slider.pointer_down(0.0);
    slider.pointer_move(200.0);
    let commit = slider.commit_text(2001.0, 2002.0).expect("commit");
    assert_eq!(commit.year_range(), YearRange::new(2001, 2002));
    assert_eq!(slider.mode(), RangeInteractionMode::Idle);
    assert!(slider.pointer_up().is_none());
}

#[test]
fn continuous_domain_keeps_fractional_values() {
    let mut slider =
        RangeSelectionController::new(0.0, 60.0, 600.0, RangeQuantization::Continuous)
            .expect("price slider");
    slider.pointer_down(600.0);
    slider.pointer_move(125.0);
    let commit = slider.pointer_up().expect("commit");
    assert_relative_eq!(commit.range.min(), 0.0);
    assert_relative_eq!(commit.range.max(), 12.5);
}

#[test]
fn single_year_domain_is_supported() {
    let mut slider = RangeSelectionController::for_years(YearRange::new(2019, 2019), 300.0)
        .expect("slider");
    slider.pointer_down(150.0);
    slider.pointer_move(299.0);
    let commit = slider.pointer_up().expect("commit");
    assert_eq!(commit.year_range(), YearRange::new(2019, 2019));
}

#[test]
fn reset_domain_selects_new_domain() {
    let mut slider = year_slider();
    slider.commit_text(2003.0, 2004.0).expect("commit");
    slider.reset_domain(1995.0, 2005.0).expect("reset");
    assert_eq!(slider.committed(), ValueRange::new(1995.0, 2005.0).expect("range"));
    assert_relative_eq!(slider.handle_positions().upper_px, 400.0);
}

#[test]
fn invalid_construction_is_rejected() {
    assert!(RangeSelectionController::new(0.0, 1.0, 0.0, RangeQuantization::Integer).is_err());
    assert!(
        RangeSelectionController::new(f64::NAN, 1.0, 100.0, RangeQuantization::Integer).is_err()
    );
}
