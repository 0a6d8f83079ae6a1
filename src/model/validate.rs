use std::collections::{HashMap, HashSet, VecDeque};

use itertools::Itertools;

use super::element::{FlowElement, SequenceFlow, SubProcess};
use super::process::Process;
use crate::error::ValidationError;

/// Checks a sub-process for well-formedness: unique element ids, sequence
/// flows that reference existing elements, at least one start and end event,
/// and full coverage of the sequence graph (every non-start element is
/// reachable from a start event, every non-end element reaches an end event).
pub fn validate_sub_process(sub_process: &SubProcess) -> Result<(), ValidationError> {
    let container_id = sub_process.id.as_str();
    let elements = sub_process.flow_elements();

    check_unique_ids(container_id, elements)?;
    check_flow_endpoints(container_id, elements)?;
    check_boundary_attachments(container_id, elements)?;

    let starts: Vec<&str> = elements
        .iter()
        .filter_map(|e| match e {
            FlowElement::StartEvent(s) => Some(s.id.as_str()),
            _ => None,
        })
        .collect();
    if starts.is_empty() {
        return Err(ValidationError::MissingStartEvent {
            container_id: container_id.to_string(),
        });
    }

    let ends: Vec<&str> = elements
        .iter()
        .filter_map(|e| match e {
            FlowElement::EndEvent(s) => Some(s.id.as_str()),
            _ => None,
        })
        .collect();
    if ends.is_empty() {
        return Err(ValidationError::MissingEndEvent {
            container_id: container_id.to_string(),
        });
    }

    let flows: Vec<&SequenceFlow> = sub_process.sequence_flows().collect();
    let sequence_nodes: Vec<&str> = elements
        .iter()
        .filter(|e| e.is_sequence_node())
        .map(|e| e.id())
        .collect();

    let forward = reach(&starts, &flows, false);
    for id in &sequence_nodes {
        if !forward.contains(*id) {
            return Err(ValidationError::UnreachableElement {
                container_id: container_id.to_string(),
                element_id: id.to_string(),
            });
        }
    }

    let backward = reach(&ends, &flows, true);
    for id in &sequence_nodes {
        if !backward.contains(*id) {
            return Err(ValidationError::DeadEndElement {
                container_id: container_id.to_string(),
                element_id: id.to_string(),
            });
        }
    }

    Ok(())
}

/// Checks an enclosing process: ids unique across the whole tree (nested
/// sub-process internals included), sequence flows and boundary attachments
/// resolvable, and every owned sub-process well-formed.
///
/// A process is not required to carry its own start or end events at this
/// layer; the engine-facing wiring of the outer graph belongs to the host.
pub fn validate_process(process: &Process) -> Result<(), ValidationError> {
    let container_id = process.id.as_str();
    let elements = process.flow_elements();

    let mut all_ids: Vec<&str> = Vec::new();
    for element in elements {
        collect_ids(element, &mut all_ids);
    }
    if let Some(id) = all_ids.iter().duplicates().next() {
        return Err(ValidationError::DuplicateElementId {
            container_id: container_id.to_string(),
            id: id.to_string(),
        });
    }

    check_flow_endpoints(container_id, elements)?;
    check_boundary_attachments(container_id, elements)?;

    for element in elements {
        if let FlowElement::SubProcess(sub) = element {
            validate_sub_process(sub)?;
        }
    }

    Ok(())
}

fn collect_ids<'a>(element: &'a FlowElement, out: &mut Vec<&'a str>) {
    out.push(element.id());
    if let FlowElement::SubProcess(sub) = element {
        for inner in sub.flow_elements() {
            collect_ids(inner, out);
        }
    }
}

fn check_unique_ids(container_id: &str, elements: &[FlowElement]) -> Result<(), ValidationError> {
    if let Some(id) = elements.iter().map(|e| e.id()).duplicates().next() {
        return Err(ValidationError::DuplicateElementId {
            container_id: container_id.to_string(),
            id: id.to_string(),
        });
    }
    Ok(())
}

fn check_flow_endpoints(container_id: &str, elements: &[FlowElement]) -> Result<(), ValidationError> {
    let ids: HashSet<&str> = elements.iter().map(|e| e.id()).collect();
    for element in elements {
        if let FlowElement::SequenceFlow(flow) = element {
            for endpoint in [&flow.source_ref, &flow.target_ref] {
                if !ids.contains(endpoint.as_str()) {
                    return Err(ValidationError::UnknownFlowEndpoint {
                        container_id: container_id.to_string(),
                        flow_id: flow.id.clone(),
                        element_id: endpoint.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}

fn check_boundary_attachments(
    container_id: &str,
    elements: &[FlowElement],
) -> Result<(), ValidationError> {
    let ids: HashSet<&str> = elements.iter().map(|e| e.id()).collect();
    for element in elements {
        if let FlowElement::BoundaryEvent(event) = element {
            if !ids.contains(event.attached_to_ref.as_str()) {
                return Err(ValidationError::UnknownBoundaryAttachment {
                    container_id: container_id.to_string(),
                    event_id: event.id.clone(),
                    attached_to: event.attached_to_ref.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Breadth-first closure over sequence flows, forward or reversed.
fn reach<'a>(seeds: &[&'a str], flows: &[&'a SequenceFlow], reversed: bool) -> HashSet<&'a str> {
    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for flow in flows {
        let (from, to) = if reversed {
            (flow.target_ref.as_str(), flow.source_ref.as_str())
        } else {
            (flow.source_ref.as_str(), flow.target_ref.as_str())
        };
        adjacency.entry(from).or_default().push(to);
    }

    let mut visited: HashSet<&str> = seeds.iter().copied().collect();
    let mut queue: VecDeque<&str> = seeds.iter().copied().collect();
    while let Some(current) = queue.pop_front() {
        if let Some(next) = adjacency.get(current) {
            for &target in next {
                if visited.insert(target) {
                    queue.push_back(target);
                }
            }
        }
    }
    visited
}
