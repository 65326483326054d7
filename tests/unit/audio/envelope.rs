use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn fades_in_and_out_over_the_composition() {
    let m = AudioMotion::default();
    let v = |f| voiceover_volume(fps30(), FrameIndex(f), 450, &m);
    assert_eq!(v(0), 0.0);
    assert!((v(3) - 1.0 / 3.0).abs() < 1e-9);
    assert_eq!(v(9), 1.0);
    assert_eq!(v(200), 1.0);
    assert_eq!(v(441), 1.0);
    assert!((v(447) - 1.0 / 3.0).abs() < 1e-9);
    assert_eq!(v(450), 0.0);
}

#[test]
fn short_composition_fades_meet_in_the_middle() {
    let m = AudioMotion { fade_secs: 1.0 };
    let v = |f| voiceover_volume(fps30(), FrameIndex(f), 10, &m);
    assert_eq!(v(5), 1.0);
    assert!((v(2) - 0.4).abs() < 1e-9);
    assert!((v(8) - 0.4).abs() < 1e-9);
}

#[test]
fn zero_fade_is_a_hard_gate() {
    let m = AudioMotion { fade_secs: 0.0 };
    assert_eq!(voiceover_volume(fps30(), FrameIndex(0), 450, &m), 1.0);
    assert_eq!(voiceover_volume(fps30(), FrameIndex(450), 450, &m), 0.0);
}

#[test]
fn cue_only_when_source_present() {
    let m = AudioMotion::default();
    assert_eq!(voiceover_cue(None, fps30(), FrameIndex(10), 450, &m), None);
    let cue = voiceover_cue(Some("vo.mp3"), fps30(), FrameIndex(10), 450, &m).unwrap();
    assert_eq!(cue.source, "vo.mp3");
    assert_eq!(cue.volume, 1.0);
}

#[test]
fn rejects_negative_fade() {
    assert!(AudioMotion { fade_secs: -0.1 }.validate().is_err());
    AudioMotion::default().validate().unwrap();
}
