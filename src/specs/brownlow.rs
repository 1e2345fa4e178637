// src/specs/brownlow.rs
//
// The official Brownlow count page (footywire). One <tr> per player:
//
//   <td height="24" align="left">&nbsp;<a ...>player</a>...</td>
//   <td align="left"><a ...>club</a></td>
//   <td align="center">votes</td>
//
// Page row order is the published standing and is preserved. Zero
// matching rows means the markup no longer looks like this, and that is
// an error, not an empty count.

use std::error::Error;

use crate::core::html::{inner_after_open_tag, next_tag_block_ci, strip_tags, to_lower};
use crate::core::sanitize::normalize_entities;
use crate::official::OfficialVotes;

pub fn parse_doc(doc: &str) -> Result<OfficialVotes, Box<dyn Error>> {
    let mut rows: Vec<(String, u32)> = Vec::new();

    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(doc, "<tr", "</tr>", pos) {
        let tr = &doc[tr_s..tr_e];
        pos = tr_e;

        if let Some(row) = parse_row(tr) {
            rows.push(row);
        }
    }

    if rows.is_empty() {
        return Err("no vote rows found: official count page layout has changed".into());
    }

    logd!("Brownlow: parsed {} vote rows", rows.len());
    Ok(OfficialVotes::from_rows(rows))
}

/// One candidate <tr>: name cell, club cell, votes cell, in that order.
/// Anything else on the page (headers, nav, furniture rows) returns None.
fn parse_row(tr: &str) -> Option<(String, u32)> {
    let mut tds: Vec<&str> = Vec::new();
    let mut pos = 0usize;
    while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", pos) {
        tds.push(&tr[td_s..td_e]);
        pos = td_e;
    }
    if tds.len() < 3 {
        return None;
    }

    // Name cell: the height-24 left-aligned td holding the player anchor.
    let name_ix = tds.iter().position(|td| {
        let opener = td_opener(td);
        opener.contains(r#"height="24""#) && opener.contains(r#"align="left""#)
    })?;
    let name = anchor_text(tds[name_ix])?;

    // Club cell: the next td must also carry an anchor. This is what
    // separates count rows from other height-24 rows on the page.
    let club_td = tds.get(name_ix + 1)?;
    if !to_lower(club_td).contains("<a") {
        return None;
    }

    // Votes cell: a centered integer right after the club.
    let votes_td = tds.get(name_ix + 2)?;
    if !td_opener(votes_td).contains(r#"align="center""#) {
        return None;
    }
    let votes_txt = strip_tags(normalize_entities(&inner_after_open_tag(votes_td)));
    let votes: u32 = votes_txt.trim().parse().ok()?;

    Some((name, votes))
}

/// Lowercased open tag of a td block.
fn td_opener(td: &str) -> String {
    let end = td.find('>').map(|i| i + 1).unwrap_or(td.len());
    to_lower(&td[..end])
}

/// Text of the first anchor inside a block, entities and ws normalized.
fn anchor_text(block: &str) -> Option<String> {
    let (a_s, a_e) = next_tag_block_ci(block, "<a", "</a>", 0)?;
    let inner = inner_after_open_tag(&block[a_s..a_e]);
    let clean = strip_tags(normalize_entities(&inner));
    (!clean.is_empty()).then_some(clean)
}
