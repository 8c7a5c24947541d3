//! End-to-end conversion: TRS in, WebVTT out.

use std::path::Path;

use crate::config::ConversionSettings;
use crate::error::ConvertResult;
use crate::transcode::{transcode_transcript, NoiseTable};
use crate::trs::{self, Transcript};
use crate::vtt::{assemble, VttHeader};

/// Convert an already parsed transcript.
pub fn convert_transcript(
    transcript: &Transcript,
    options: &ConversionSettings,
) -> ConvertResult<String> {
    let blocks = transcode_transcript(transcript, options, NoiseTable::shared())?;
    let header = match &options.language {
        Some(language) => VttHeader::with_language(language.as_str()),
        None => VttHeader::new(),
    };
    tracing::info!(captions = blocks.len(), "Converted transcript");
    Ok(assemble(&header, &blocks))
}

/// Convert TRS XML text.
pub fn convert_str(xml: &str, options: &ConversionSettings) -> ConvertResult<String> {
    let transcript = trs::parse_trs(xml)?;
    convert_transcript(&transcript, options)
}

/// Convert raw TRS bytes, decoding them per the XML declaration or `encoding`.
pub fn convert_bytes(
    bytes: &[u8],
    encoding: Option<&str>,
    options: &ConversionSettings,
) -> ConvertResult<String> {
    let transcript = trs::parse_bytes(bytes, encoding)?;
    convert_transcript(&transcript, options)
}

/// Convert a TRS file on disk.
pub fn convert_file(
    path: impl AsRef<Path>,
    encoding: Option<&str>,
    options: &ConversionSettings,
) -> ConvertResult<String> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "Reading TRS file");
    let transcript = trs::parse_file(path, encoding)?;
    convert_transcript(&transcript, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;

    const INTERVIEW: &str = r#"<?xml version="1.0" encoding="ISO-8859-1"?>
<!DOCTYPE Trans SYSTEM "trans-14.dtd">
<Trans scribe="someone" audio_filename="interview" version="3" version_date="081023">
<Speakers>
<Speaker id="spk1" name="Alice" check="no" dialect="native" accent="" scope="local"/>
<Speaker id="spk2" name="Bob" check="no" dialect="native" accent="" scope="local"/>
</Speakers>
<Episode>
<Section type="report" startTime="0" endTime="7.25">
<Turn startTime="0" endTime="3.5" speaker="spk1">
<Sync time="0"/>
good morning
<Event desc="rire" type="noise" extent="instantaneous"/>
<Event desc="b" type="noise" extent="instantaneous"/>
everyone
<Sync time="2"/>
shall we start
</Turn>
<Turn startTime="3.5" endTime="7.25" speaker="spk2 spk1">
<Sync time="3.5"/>
<Who nb="1"/>
yes please
<Who nb="2"/>
<Comment desc="overlapping"/>
great
</Turn>
</Section>
<Section type="nontrans" startTime="7.25" endTime="9"/>
<Section type="report" startTime="9" endTime="12">
<Turn startTime="9" endTime="12" speaker="spk1">
<Sync time="9"/>
see you
</Turn>
</Section>
</Episode>
</Trans>
"#;

    #[test]
    fn converts_full_document() {
        let options = ConversionSettings::default()
            .with_language("en")
            .with_speakers(true);
        let vtt = convert_str(INTERVIEW, &options).unwrap();

        let expected = "WEBVTT\n\
            Language: en\n\
            \n\
            00:00:00.000 --> 00:00:02.000\n\
            <v Alice>good morning everyone\n\
            \n\
            00:00:02.000 --> 00:00:03.500\n\
            <v Alice>shall we start\n\
            \n\
            00:00:03.500 --> 00:00:07.250\n\
            <v Alice>yes please great\n\
            \n\
            00:00:09.000 --> 00:00:12.000\n\
            <v Alice>see you\n";
        assert_eq!(vtt, expected);
    }

    #[test]
    fn noise_markers_are_spaced_once() {
        let options = ConversionSettings::default().with_noise(true);
        let vtt = convert_str(INTERVIEW, &options).unwrap();
        assert!(vtt.contains("good morning <i>(laughs)</i> <i>(breath)</i> everyone\n"));
        assert!(!vtt.contains("  "));
    }

    #[test]
    fn noise_flag_is_irrelevant_without_events() {
        let xml = INTERVIEW
            .lines()
            .filter(|line| !line.starts_with("<Event"))
            .collect::<Vec<_>>()
            .join("\n");
        let plain = ConversionSettings::default().with_speakers(true);
        let noisy = plain.clone().with_noise(true);
        assert_eq!(
            convert_str(&xml, &plain).unwrap(),
            convert_str(&xml, &noisy).unwrap()
        );
    }

    #[test]
    fn captions_follow_source_order() {
        let vtt = convert_str(INTERVIEW, &ConversionSettings::default()).unwrap();
        let timings: Vec<&str> = vtt.lines().filter(|l| l.contains("-->")).collect();
        assert_eq!(
            timings,
            vec![
                "00:00:00.000 --> 00:00:02.000",
                "00:00:02.000 --> 00:00:03.500",
                "00:00:03.500 --> 00:00:07.250",
                "00:00:09.000 --> 00:00:12.000",
            ]
        );
    }

    #[test]
    fn latin1_bytes_convert_to_utf8() {
        let mut bytes = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n\
<Trans><Speakers><Speaker id=\"a\" name=\"Ren"
            .to_vec();
        bytes.push(0xE9);
        bytes.extend_from_slice(
            b"\"/></Speakers><Episode><Section startTime=\"0\" endTime=\"1\">\
<Turn startTime=\"0\" endTime=\"1\" speaker=\"a\"><Sync time=\"0\"/>caf",
        );
        bytes.push(0xE9);
        bytes.extend_from_slice(b"</Turn></Section></Episode></Trans>");

        let options = ConversionSettings::default().with_speakers(true);
        let vtt = convert_bytes(&bytes, None, &options).unwrap();
        assert!(vtt.contains("<v Ren\u{e9}>caf\u{e9}\n"));
    }

    fn single_turn(body: &str, end: f64) -> String {
        format!(
            r#"<Trans><Speakers><Speaker id="a" name="Jean  Paul"/></Speakers><Episode>
<Section startTime="0" endTime="{end}"><Turn startTime="0" endTime="{end}" speaker="a">{body}</Turn>
</Section></Episode></Trans>"#
        )
    }

    #[test]
    fn event_without_extent_converts() {
        let xml = single_turn(
            r#"<Sync time="0"/>hi<Event desc="rire" type="noise"/>there"#,
            2.0,
        );
        let plain = convert_str(&xml, &ConversionSettings::default()).unwrap();
        assert_eq!(
            plain,
            "WEBVTT\n\n00:00:00.000 --> 00:00:02.000\nhi there\n"
        );

        let noisy = convert_str(&xml, &ConversionSettings::default().with_noise(true)).unwrap();
        assert!(noisy.contains("\nhi <i>(laughs)</i> there\n"));
    }

    #[test]
    fn text_before_first_sync_is_not_captioned() {
        let xml = single_turn(r#"stray<Sync time="1"/>after"#, 2.0);
        let vtt = convert_str(&xml, &ConversionSettings::default()).unwrap();
        assert_eq!(
            vtt,
            "WEBVTT\n\n00:00:01.000 --> 00:00:02.000\nafter\n"
        );
    }

    #[test]
    fn trailing_sync_past_turn_end_is_harmless() {
        let xml = single_turn(r#"<Sync time="0"/>x<Sync time="2.5"/>"#, 2.0);
        let vtt = convert_str(&xml, &ConversionSettings::default()).unwrap();
        assert_eq!(
            vtt,
            "WEBVTT\n\n00:00:00.000 --> 00:00:02.500\nx\n"
        );
    }

    #[test]
    fn speaker_names_keep_their_spacing() {
        let xml = single_turn(r#"<Sync time="0"/>bonjour"#, 1.0);
        for options in [
            ConversionSettings::default().with_speakers(true),
            ConversionSettings::default().with_speakers(true).with_noise(true),
        ] {
            let vtt = convert_str(&xml, &options).unwrap();
            assert!(vtt.contains("\n<v Jean  Paul>bonjour\n"));
        }
    }

    #[test]
    fn errors_abort_conversion() {
        let xml = INTERVIEW.replace("<Who nb=\"2\"/>", "<Who nb=\"9\"/>");
        assert!(matches!(
            convert_str(&xml, &ConversionSettings::default()),
            Err(ConvertError::UnknownSpeakerIndex { index: 9, .. })
        ));
    }

    #[test]
    fn missing_file() {
        let result = convert_file("/nonexistent.trs", None, &ConversionSettings::default());
        assert!(matches!(result, Err(ConvertError::ReadError { .. })));
    }
}
