use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(60, 0).is_err());
    assert_eq!(Fps::new(30000, 1001).unwrap().num, 30000);
}

#[test]
fn frame_aligned_durations_are_exact() {
    let fps = Fps::new(60, 1).unwrap();
    assert_eq!(fps.frames_to_millis(12), 200.0);
    assert_eq!(fps.frames_to_millis(15), 250.0);
    assert_eq!(fps.frames_to_millis(0), 0.0);
}

#[test]
fn frame_index_since_saturates() {
    assert_eq!(FrameIndex(10).since(FrameIndex(4)), 6);
    assert_eq!(FrameIndex(4).since(FrameIndex(10)), 0);
}

#[test]
fn frame_ctx_next_keeps_viewport() {
    let ctx = FrameCtx::new(
        FrameIndex(7),
        Fps::new(60, 1).unwrap(),
        Size::new(400.0, 200.0),
    );
    let next = ctx.next();
    assert_eq!(next.frame, FrameIndex(8));
    assert_eq!(next.viewport, ctx.viewport);
}

#[test]
fn hand_built_fps_is_checked() {
    assert!(Fps { num: 60, den: 0 }.validate().is_err());
    assert!(Fps { num: 0, den: 1 }.validate().is_err());
    assert!(Fps { num: 24, den: 1 }.validate().is_ok());
}
