//! TRS XML parsing.
//!
//! Handles the Transcriber transcript format:
//! ```xml
//! <?xml version="1.0" encoding="ISO-8859-1"?>
//! <!DOCTYPE Trans SYSTEM "trans-14.dtd">
//! <Trans audio_filename="interview" version="2">
//!   <Speakers>
//!     <Speaker id="spk1" name="Alice" check="no" dialect="native"/>
//!   </Speakers>
//!   <Episode>
//!     <Section type="report" startTime="0" endTime="5.2">
//!       <Turn startTime="0" endTime="5.2" speaker="spk1">
//!         <Sync time="0"/>
//!         hello there
//!         <Event desc="rire" type="noise" extent="instantaneous"/>
//!         <Sync time="2.5"/>
//!         how are you
//!       </Turn>
//!     </Section>
//!   </Episode>
//! </Trans>
//! ```
//!
//! Each `<Turn>` is flattened into an ordered list of [`Annotation`]s so the
//! transcoder never has to look at the tree.

use roxmltree::{Document, Node, ParsingOptions};

use super::types::{Annotation, AnnotationKind, EventExtent, SpeakerDecl, Transcript, Turn};
use crate::error::{ConvertError, ConvertResult};

/// Parse TRS XML text into a [`Transcript`].
pub fn parse_trs(xml: &str) -> ConvertResult<Transcript> {
    // Transcriber files always carry a DOCTYPE line.
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options)?;
    let root = doc.root_element();

    let speakers_node = child_element(root, "Speakers")
        .ok_or_else(|| ConvertError::malformed("missing <Speakers> section"))?;
    let episode = child_element(root, "Episode")
        .ok_or_else(|| ConvertError::malformed("missing <Episode> section"))?;

    let mut transcript = Transcript::new();
    transcript.speakers = parse_speakers(speakers_node)?;

    for turn in episode
        .descendants()
        .filter(|n| is_tag(n, "Turn") && n.ancestors().any(|a| is_tag(&a, "Section")))
    {
        transcript.turns.push(parse_turn(turn)?);
    }

    tracing::debug!(
        speakers = transcript.speakers.len(),
        turns = transcript.turn_count(),
        "Parsed TRS document"
    );

    Ok(transcript)
}

/// Parse every `<Speaker>` below the `<Speakers>` node.
fn parse_speakers(node: Node) -> ConvertResult<Vec<SpeakerDecl>> {
    node.descendants()
        .filter(|n| is_tag(n, "Speaker"))
        .map(|speaker| {
            let id = required_attr(speaker, "id")?;
            let name = required_attr(speaker, "name")?;
            Ok(SpeakerDecl::new(id, name))
        })
        .collect()
}

/// Parse a `<Turn>` and flatten its children.
fn parse_turn(node: Node) -> ConvertResult<Turn> {
    let start = parse_time(node, "startTime")?;
    let end = parse_time(node, "endTime")?;

    // Text before the first child element belongs to no sync span.
    let mut turn = Turn::new(start, end)
        .with_speakers(node.attribute("speaker").unwrap_or("").split_whitespace());

    for child in node.descendants().skip(1).filter(|n| n.is_element()) {
        let kind = match child.tag_name().name() {
            "Sync" => AnnotationKind::Sync {
                time: parse_time(child, "time")?,
            },
            "Who" => {
                let raw = required_attr(child, "nb")?;
                let index = raw.trim().parse::<usize>().map_err(|_| {
                    ConvertError::malformed(format!("invalid <Who nb=\"{}\">", raw))
                })?;
                AnnotationKind::Who { index }
            }
            "Event" => AnnotationKind::Event {
                extent: EventExtent::from_attribute(child.attribute("extent")),
                description: child.attribute("desc").map(str::to_string),
            },
            "Comment" => AnnotationKind::Comment,
            other => {
                return Err(ConvertError::UnrecognizedAnnotation {
                    tag: other.to_string(),
                    turn_start: start,
                })
            }
        };
        let tail = collect_text_from(child.next_sibling());
        turn.annotations.push(Annotation::new(kind, tail));
    }

    Ok(turn)
}

/// Concatenate text siblings starting at `node`, stopping at the next element.
///
/// XML comments and processing instructions are skipped, not treated as
/// boundaries.
fn collect_text_from(mut node: Option<Node>) -> String {
    let mut text = String::new();
    while let Some(current) = node {
        if current.is_element() {
            break;
        }
        if let Some(fragment) = current.text().filter(|_| current.is_text()) {
            text.push_str(fragment);
        }
        node = current.next_sibling();
    }
    text
}

fn child_element<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| is_tag(n, name))
}

fn is_tag(node: &Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

fn required_attr<'a>(node: Node<'a, '_>, name: &str) -> ConvertResult<&'a str> {
    node.attribute(name).ok_or_else(|| {
        ConvertError::malformed(format!(
            "<{}> is missing the '{}' attribute",
            node.tag_name().name(),
            name
        ))
    })
}

/// Parse a time attribute in seconds (`ssss[.sss]`).
fn parse_time(node: Node, name: &str) -> ConvertResult<f64> {
    let raw = required_attr(node, name)?;
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ConvertError::malformed(format!(
            "invalid time {}=\"{}\" on <{}>",
            name,
            raw,
            node.tag_name().name()
        ))),
    }
}
