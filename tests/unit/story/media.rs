use super::*;

#[test]
fn background_audio_loops_by_default() {
    let audio: BackgroundAudio = serde_json::from_str(
        r#"{ "resource": { "src": "https://example.com/a.mp3", "mimeType": "audio/mpeg", "length": 15 } }"#,
    )
    .unwrap();
    assert!(audio.looping);
    assert!(!audio.needs_enhanced_embed());
    assert_eq!(audio.pacing_duration_secs(), 0.0);
}

#[test]
fn non_looping_audio_paces_and_needs_enhanced_embed() {
    let audio = BackgroundAudio {
        looping: false,
        ..BackgroundAudio::new(Resource::new("a.mp3", "audio/mpeg").with_length(15.0))
    };
    assert!(audio.needs_enhanced_embed());
    assert_eq!(audio.pacing_duration_secs(), 15.0);
}

#[test]
fn captions_force_enhanced_embed_even_when_looping() {
    let mut audio = BackgroundAudio::new(Resource::new("a.mp3", "audio/mpeg"));
    audio.tracks.push(CaptionTrack {
        id: "t1".to_string(),
        track: "https://example.com/a.vtt".to_string(),
        track_id: None,
        kind: "captions".to_string(),
        srclang: "en".to_string(),
        label: "English".to_string(),
    });
    assert!(audio.looping);
    assert!(audio.needs_enhanced_embed());
}

#[test]
fn aspect_ratio_requires_both_dimensions() {
    let r = Resource::new("a.jpg", "image/jpeg");
    assert_eq!(r.aspect_ratio(), None);
    assert_eq!(r.with_size(200.0, 100.0).aspect_ratio(), Some(2.0));
}

#[test]
fn gif_output_defaults_to_mp4() {
    let r: Resource = serde_json::from_str(
        r#"{ "src": "a.gif", "mimeType": "image/gif", "output": { "src": "a.mp4" } }"#,
    )
    .unwrap();
    assert_eq!(r.output.unwrap().mime_type, "video/mp4");
}
