//! Audio graph - owns nodes, message queues, and the frame clock

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dasp_graph::{Buffer, Input, NodeData, Processor};
use hashbrown::HashMap;
use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableGraph;
use rtrb::{Consumer, Producer, RingBuffer};
use tracing::trace;

use crate::node::{AudioNode, NodeId, ProcessContext};

/// Handle to send messages to a node in an [`AudioGraph`]
pub(crate) struct NodeHandle<M: Send + 'static> {
    pub(crate) id: NodeId,
    pub(crate) sender: Producer<M>,
    pub(crate) _marker: PhantomData<M>,
}

impl<M: Send + 'static> NodeHandle<M> {
    /// Send a message to the node (applied next process cycle)
    ///
    /// Returns Err if the queue is full (message dropped)
    pub fn send(&mut self, msg: M) -> Result<(), M> {
        self.sender.push(msg).map_err(|rtrb::PushError::Full(v)| v)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }
}

// Type-erased wrapper so we can store heterogeneous nodes
trait ErasedNode: Send {
    fn process_erased(&mut self, ctx: &ProcessContext, inputs: &[Input], outputs: &mut [Buffer]);
}

struct NodeWrapper<N: AudioNode> {
    node: N,
    receiver: Consumer<N::Message>,
}

impl<N: AudioNode> ErasedNode for NodeWrapper<N> {
    fn process_erased(&mut self, ctx: &ProcessContext, inputs: &[Input], outputs: &mut [Buffer]) {
        // Split borrow to avoid conflict between receiver and node
        let receiver = &mut self.receiver;
        let node = &mut self.node;

        // Create a draining iterator directly from the consumer - no allocation!
        let messages = std::iter::from_fn(|| receiver.pop().ok());
        node.process(ctx, messages, inputs, outputs);
    }
}

// Adapter for dasp_graph
struct DaspAdapter {
    node: Box<dyn ErasedNode>,
    ctx: ProcessContext,
}

impl dasp_graph::Node for DaspAdapter {
    fn process(&mut self, inputs: &[Input], outputs: &mut [Buffer]) {
        self.node.process_erased(&self.ctx, inputs, outputs);
    }
}

// StableGraph keeps the indices of surviving nodes valid across removals,
// which is what lets a voice set be released without rebuilding the graph.
type InnerGraph = StableGraph<NodeData<DaspAdapter>, ()>;

/// An audio processing graph at a fixed sample rate
pub(crate) struct AudioGraph {
    graph: InnerGraph,
    processor: Processor<InnerGraph>,
    ctx: ProcessContext,
    frames: Arc<AtomicU64>,

    node_indices: HashMap<NodeId, NodeIndex>,
    next_node_id: u32,

    terminal: Option<NodeIndex>,
}

impl AudioGraph {
    /// Create a new graph with the given sample rate
    pub fn new(sample_rate: u32) -> Self {
        let frames = Arc::new(AtomicU64::new(0));
        Self {
            graph: InnerGraph::with_capacity(64, 64),
            processor: Processor::with_capacity(64),
            ctx: ProcessContext::new(sample_rate, frames.clone()),
            frames,
            node_indices: HashMap::new(),
            next_node_id: 0,
            terminal: None,
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.ctx.sample_rate
    }

    /// Time of the next block's first sample, in seconds on the graph clock
    pub fn now(&self) -> f64 {
        self.frames.load(Ordering::Relaxed) as f64 / self.ctx.sample_rate as f64
    }

    /// Add a node, returns a handle for sending messages
    pub fn add<N: AudioNode>(&mut self, node: N) -> NodeHandle<N::Message> {
        self.add_with_queue_size(node, 64)
    }

    /// Add a node with a custom message queue size
    pub fn add_with_queue_size<N: AudioNode>(
        &mut self,
        node: N,
        queue_size: usize,
    ) -> NodeHandle<N::Message> {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;

        let (producer, consumer) = RingBuffer::new(queue_size);

        let num_outputs = node.num_outputs();
        let wrapper = NodeWrapper {
            node,
            receiver: consumer,
        };
        let adapter = DaspAdapter {
            node: Box::new(wrapper),
            ctx: self.ctx.clone(),
        };

        let node_data = match num_outputs {
            1 => NodeData::new1(adapter),
            2 => NodeData::new2(adapter),
            // 0 outputs = sink, but dasp_graph still needs a buffer for inputs
            _ => NodeData::new1(adapter),
        };

        let idx = self.graph.add_node(node_data);
        self.node_indices.insert(id, idx);

        NodeHandle {
            id,
            sender: producer,
            _marker: PhantomData,
        }
    }

    /// Connect output of `from` to input of `to`
    pub fn connect<M1, M2>(&mut self, from: &NodeHandle<M1>, to: &NodeHandle<M2>)
    where
        M1: Send + 'static,
        M2: Send + 'static,
    {
        self.connect_ids(from.id, to.id);
    }

    /// Connect by node id; silently ignores ids that are no longer in the graph
    pub fn connect_ids(&mut self, from: NodeId, to: NodeId) {
        if let (Some(&from_idx), Some(&to_idx)) =
            (self.node_indices.get(&from), self.node_indices.get(&to))
        {
            self.graph.add_edge(from_idx, to_idx, ());
        }
    }

    /// Remove a node and all its edges.
    ///
    /// Returns false if the id was already removed (safe to call twice).
    pub fn remove(&mut self, id: NodeId) -> bool {
        match self.node_indices.remove(&id) {
            Some(idx) => {
                if self.terminal == Some(idx) {
                    self.terminal = None;
                }
                self.graph.remove_node(idx);
                trace!(?id, "removed node");
                true
            }
            None => false,
        }
    }

    /// Number of nodes currently in the graph
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Set which node to process to (typically a sink)
    pub fn set_terminal<M: Send + 'static>(&mut self, handle: &NodeHandle<M>) {
        self.terminal = Some(self.node_indices[&handle.id]);
    }

    /// Process one block of audio through the graph and advance the clock
    pub fn process_block(&mut self) {
        if let Some(terminal) = self.terminal {
            self.processor.process(&mut self.graph, terminal);
        }
        self.frames
            .fetch_add(self.ctx.buffer_size as u64, Ordering::Relaxed);
    }
}
