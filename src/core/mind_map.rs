//! Die zentrale MindMap-Datenstruktur: Arena aller Nodes mit ID-Verweisen.

use super::{
    Connection, MindMapError, MindMapNode, MindMapResult, NodeBounds, NodeKind, NodeStyle,
};
use crate::shared::MindMapOptions;
use glam::Vec2;
use indexmap::IndexMap;

/// Baum aus Nodes mit genau einem Root
///
/// Alle Nodes liegen flach in einer Tabelle (Schlüssel = ID). Eltern- und
/// Kind-Verweise sind reine IDs; einzig die Kind-Liste des Eltern-Nodes
/// drückt Besitz aus.
#[derive(Debug, Clone)]
pub struct MindMap {
    nodes: IndexMap<u64, MindMapNode>,
    root_id: u64,
    next_id: u64,
}

impl MindMap {
    /// Erstellt eine Mindmap, die nur aus dem Root besteht
    pub fn new(root_title: impl Into<String>, root_size: Vec2, root_style: NodeStyle) -> Self {
        let root_id = 1;
        let root = MindMapNode::new(root_id, NodeKind::Root, root_title, root_size, root_style);
        let mut nodes = IndexMap::new();
        nodes.insert(root_id, root);

        Self {
            nodes,
            root_id,
            next_id: root_id + 1,
        }
    }

    /// Erstellt eine Mindmap mit Größe und Stil aus den Optionen
    pub fn with_options(root_title: impl Into<String>, options: &MindMapOptions) -> Self {
        Self::new(
            root_title,
            options.node_size_for(NodeKind::Root),
            options.node_style_for(NodeKind::Root),
        )
    }

    // ── Zugriff ─────────────────────────────────────────────────────

    /// ID des Root-Nodes
    pub fn root_id(&self) -> u64 {
        self.root_id
    }

    /// Node nach ID
    pub fn node(&self, id: u64) -> Option<&MindMapNode> {
        self.nodes.get(&id)
    }

    /// Veränderbarer Node nach ID
    pub fn node_mut(&mut self, id: u64) -> Option<&mut MindMapNode> {
        self.nodes.get_mut(&id)
    }

    /// Node nach ID oder `NotFound`
    pub fn get(&self, id: u64) -> MindMapResult<&MindMapNode> {
        self.nodes.get(&id).ok_or(MindMapError::NotFound(id))
    }

    /// Veränderbarer Node nach ID oder `NotFound`
    pub fn get_mut(&mut self, id: u64) -> MindMapResult<&mut MindMapNode> {
        self.nodes.get_mut(&id).ok_or(MindMapError::NotFound(id))
    }

    /// Ob ein Node mit dieser ID existiert
    pub fn contains_node(&self, id: u64) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Anzahl aller Nodes (inkl. losgelöster)
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Alle Nodes in Anlegereihenfolge
    pub fn nodes(&self) -> impl Iterator<Item = &MindMapNode> {
        self.nodes.values()
    }

    /// Alle Nodes veränderbar
    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut MindMapNode> {
        self.nodes.values_mut()
    }

    // ── Anlegen ─────────────────────────────────────────────────────

    /// Legt einen losgelösten Node an und gibt seine ID zurück.
    ///
    /// Ein zweiter Root wird abgelehnt.
    pub fn create_node(
        &mut self,
        kind: NodeKind,
        title: impl Into<String>,
        size: Vec2,
        style: NodeStyle,
    ) -> MindMapResult<u64> {
        if kind == NodeKind::Root {
            return Err(MindMapError::InvariantViolation(
                "es existiert bereits ein Root-Node".to_string(),
            ));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.nodes
            .insert(id, MindMapNode::new(id, kind, title, size, style));
        Ok(id)
    }

    /// Legt einen Node mit Größe und Stil aus den Optionen an
    pub fn create_node_with_options(
        &mut self,
        kind: NodeKind,
        title: impl Into<String>,
        options: &MindMapOptions,
    ) -> MindMapResult<u64> {
        self.create_node(
            kind,
            title,
            options.node_size_for(kind),
            options.node_style_for(kind),
        )
    }

    // ── Baum-Mutation ───────────────────────────────────────────────

    /// Hängt `child_id` als letztes Kind unter `parent_id`.
    ///
    /// Ein bestehender Eltern-Verweis wird vorher gelöst. Schlägt mit
    /// `Cycle` fehl, wenn `child_id` Vorfahre von `parent_id` ist (oder
    /// beide gleich sind); der Baum bleibt dann unverändert.
    pub fn add_child(&mut self, parent_id: u64, child_id: u64) -> MindMapResult<()> {
        self.get(parent_id)?;
        self.get(child_id)?;

        if child_id == self.root_id {
            return Err(MindMapError::InvariantViolation(
                "der Root-Node kann nicht umgehängt werden".to_string(),
            ));
        }
        if child_id == parent_id || self.is_ancestor(child_id, parent_id) {
            return Err(MindMapError::Cycle {
                node_id: child_id,
                parent_id,
            });
        }

        self.detach(child_id)?;

        if let Some(parent) = self.nodes.get_mut(&parent_id) {
            parent.children.push(child_id);
        }
        if let Some(child) = self.nodes.get_mut(&child_id) {
            child.parent = Some(parent_id);
        }
        Ok(())
    }

    /// Entfernt `child_id` aus der Kind-Liste von `parent_id`.
    ///
    /// Kein Fehler, wenn `child_id` gar kein Kind von `parent_id` ist.
    pub fn remove_child(&mut self, parent_id: u64, child_id: u64) -> MindMapResult<()> {
        self.get(child_id)?;
        let parent = self.get_mut(parent_id)?;

        let Some(index) = parent.children.iter().position(|&id| id == child_id) else {
            return Ok(());
        };
        parent.children.remove(index);

        if let Some(child) = self.nodes.get_mut(&child_id) {
            child.parent = None;
        }
        Ok(())
    }

    /// Löst einen Node von seinem Eltern-Node (kein Fehler wenn bereits losgelöst)
    pub fn detach(&mut self, node_id: u64) -> MindMapResult<()> {
        match self.get(node_id)?.parent {
            Some(parent_id) => self.remove_child(parent_id, node_id),
            None => Ok(()),
        }
    }

    /// Hängt einen Node samt Teilbaum unter einen neuen Eltern-Node
    pub fn reparent(&mut self, node_id: u64, new_parent_id: u64) -> MindMapResult<()> {
        self.add_child(new_parent_id, node_id)
    }

    /// Pinnt einen Node an seiner aktuellen Lage relativ zur Eltern-Mitte.
    ///
    /// Nodes ohne Eltern-Node (Root, losgelöste Nodes) werden nicht gepinnt.
    pub fn pin_at_current_position(&mut self, node_id: u64) -> MindMapResult<()> {
        let node = self.get(node_id)?;
        let offset = match node.parent {
            Some(parent_id) => Some(node.center() - self.get(parent_id)?.center()),
            None => None,
        };
        self.get_mut(node_id)?.pin_offset = offset;
        Ok(())
    }

    // ── Abfragen ────────────────────────────────────────────────────

    /// Prüft ob `ancestor_id` ein echter Vorfahre von `node_id` ist
    pub fn is_ancestor(&self, ancestor_id: u64, node_id: u64) -> bool {
        let mut current = self.node(node_id).and_then(|n| n.parent);
        let mut steps = 0;
        while let Some(id) = current {
            if id == ancestor_id {
                return true;
            }
            steps += 1;
            if steps > self.nodes.len() {
                break;
            }
            current = self.node(id).and_then(|n| n.parent);
        }
        false
    }

    /// Alle Nachfahren eines Nodes in Pre-Order (ohne den Node selbst)
    pub fn descendants(&self, node_id: u64) -> MindMapResult<Vec<u64>> {
        let node = self.get(node_id)?;
        let mut result = Vec::new();
        let mut stack: Vec<u64> = node.children.iter().rev().copied().collect();

        while let Some(id) = stack.pop() {
            result.push(id);
            if let Some(n) = self.nodes.get(&id) {
                stack.extend(n.children.iter().rev().copied());
            }
        }
        Ok(result)
    }

    /// Tiefe im Baum (Root = 0, losgelöste Nodes ebenfalls 0)
    pub fn level(&self, node_id: u64) -> MindMapResult<usize> {
        let mut level = 0;
        let mut current = self.get(node_id)?.parent;
        while let Some(id) = current {
            level += 1;
            current = self.get(id)?.parent;
        }
        Ok(level)
    }

    /// Ob der Node keine Kinder hat
    pub fn is_leaf(&self, node_id: u64) -> MindMapResult<bool> {
        Ok(self.get(node_id)?.is_leaf())
    }

    /// Ob der Node der Root ist
    pub fn is_root(&self, node_id: u64) -> bool {
        node_id == self.root_id
    }

    /// Kind-IDs eines Nodes in Reihenfolge
    pub fn children(&self, node_id: u64) -> MindMapResult<&[u64]> {
        Ok(&self.get(node_id)?.children)
    }

    /// Eltern-ID eines Nodes
    pub fn parent(&self, node_id: u64) -> MindMapResult<Option<u64>> {
        Ok(self.get(node_id)?.parent)
    }

    /// Root und alle erreichbaren Nodes in Render-Reihenfolge (Pre-Order)
    pub fn reachable_ids(&self) -> Vec<u64> {
        let mut ids = vec![self.root_id];
        if let Ok(descendants) = self.descendants(self.root_id) {
            ids.extend(descendants);
        }
        ids
    }

    /// Oberster erreichbarer Node unter dem Punkt (zuletzt gezeichnet gewinnt)
    pub fn node_at(&self, point: Vec2) -> Option<u64> {
        self.topmost_where(point, |_| true)
    }

    /// Wie [`node_at`](Self::node_at), ignoriert aber `excluded_id`
    pub fn node_at_excluding(&self, point: Vec2, excluded_id: u64) -> Option<u64> {
        self.topmost_where(point, |id| id != excluded_id)
    }

    fn topmost_where(&self, point: Vec2, accept: impl Fn(u64) -> bool) -> Option<u64> {
        self.reachable_ids().into_iter().rev().find(|&id| {
            accept(id) && self.nodes.get(&id).is_some_and(|n| n.contains(point))
        })
    }

    /// Sucht den Item-Node zu einer externen ID
    pub fn find_by_external_id(&self, external_id: &str) -> Option<u64> {
        self.nodes
            .values()
            .find(|n| n.kind == NodeKind::Item && n.external_id() == Some(external_id))
            .map(|n| n.id)
    }

    /// Begrenzungsrechteck eines Nodes samt aller Nachfahren
    pub fn bounds(&self, node_id: u64) -> MindMapResult<NodeBounds> {
        let mut bounds = self.get(node_id)?.frame();
        for id in self.descendants(node_id)? {
            bounds = bounds.union(self.get(id)?.frame());
        }
        Ok(bounds)
    }

    /// Abgeleitete Eltern→Kind-Verbindungen aller erreichbaren Nodes
    pub fn connections(&self) -> Vec<Connection> {
        let mut connections = Vec::new();
        for id in self.reachable_ids() {
            let Some(parent) = self.nodes.get(&id) else {
                continue;
            };
            for child_id in &parent.children {
                if let Some(child) = self.nodes.get(child_id) {
                    connections.push(Connection::new(
                        parent.id,
                        child.id,
                        parent.center(),
                        child.center(),
                    ));
                }
            }
        }
        connections
    }

    // ── Entfernen ───────────────────────────────────────────────────

    /// Entfernt einen Node samt Teilbaum aus der Mindmap.
    ///
    /// Gibt die IDs aller entfernten Nodes zurück (Node zuerst).
    pub fn remove_subtree(&mut self, node_id: u64) -> MindMapResult<Vec<u64>> {
        self.reject_root(node_id, "der Root-Node kann nicht gelöscht werden")?;
        let mut removed = vec![node_id];
        removed.extend(self.descendants(node_id)?);

        self.detach(node_id)?;
        for id in &removed {
            self.nodes.shift_remove(id);
        }
        Ok(removed)
    }

    /// Entfernt nur den Node; seine Kinder rücken an seine Stelle im Eltern-Node
    pub fn remove_node_promote_children(&mut self, node_id: u64) -> MindMapResult<MindMapNode> {
        self.reject_root(node_id, "der Root-Node kann nicht gelöscht werden")?;
        let node = self.get(node_id)?;
        let parent_id = node.parent;
        let children = node.children.clone();

        if let Some(parent_id) = parent_id {
            let parent = self.get_mut(parent_id)?;
            match parent.children.iter().position(|&id| id == node_id) {
                Some(index) => {
                    parent
                        .children
                        .splice(index..index + 1, children.iter().copied());
                }
                None => parent.children.extend(children.iter().copied()),
            }
        }
        for child_id in &children {
            if let Some(child) = self.nodes.get_mut(child_id) {
                child.parent = parent_id;
            }
        }

        self.nodes
            .shift_remove(&node_id)
            .ok_or(MindMapError::NotFound(node_id))
    }

    fn reject_root(&self, node_id: u64, reason: &str) -> MindMapResult<()> {
        if node_id == self.root_id {
            return Err(MindMapError::InvariantViolation(reason.to_string()));
        }
        Ok(())
    }

    // ── Selektion & Hervorhebung ────────────────────────────────────

    /// Selektiert genau diesen Node (vorherige Selektion wird aufgehoben)
    pub fn select_only(&mut self, node_id: u64) -> MindMapResult<()> {
        self.get(node_id)?;
        for node in self.nodes.values_mut() {
            node.selected = node.id == node_id;
        }
        Ok(())
    }

    /// Hebt jede Selektion auf
    pub fn clear_selection(&mut self) {
        for node in self.nodes.values_mut() {
            node.selected = false;
        }
    }

    /// ID des selektierten Nodes
    pub fn selected_id(&self) -> Option<u64> {
        self.nodes.values().find(|n| n.selected).map(|n| n.id)
    }

    /// Hebt genau den Node hervor (None = keinen)
    pub fn set_highlighted(&mut self, node_id: Option<u64>) {
        for node in self.nodes.values_mut() {
            node.highlighted = Some(node.id) == node_id;
        }
    }
}
